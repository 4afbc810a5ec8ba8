pub(crate) mod settings_form;
