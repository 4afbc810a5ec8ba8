pub(crate) mod action_bar;
