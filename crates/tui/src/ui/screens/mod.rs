pub mod dashboard;
pub mod expense_form;
pub mod settings;
