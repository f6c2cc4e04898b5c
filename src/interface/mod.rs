pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_edit_field, prompt_menu_action, prompt_new_row, prompt_resolve_saved, prompt_select_row,
    prompt_sort, prompt_yes_no, MenuAction,
};
pub use render::{display_cost_analysis, display_form, display_saved_items};
