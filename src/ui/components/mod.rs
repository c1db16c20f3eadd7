pub mod achievement_list;
pub mod progress_bar;
pub mod question_card;
pub mod scoreboard;
