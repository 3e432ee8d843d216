pub mod daisy_ui;
pub mod join_game_form;
pub mod player_name_form;
pub mod site_header;
