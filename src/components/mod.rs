pub mod code_editor;
pub mod error_banner;
pub mod preview_pane;
pub mod prompt_panel;
