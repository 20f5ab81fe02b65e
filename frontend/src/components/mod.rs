pub mod admin {
    pub mod catalogs_panel;
    pub mod roles_panel;
    pub mod scopes_panel;
    pub mod users_panel;
}
pub mod common {
    pub mod spinner;
    pub mod toast;
}
pub mod nav;
pub mod puzzle {
    pub mod answer_input;
}
