pub mod answer_input;
pub mod card_row;
pub mod menu;
pub mod progress_bar;
