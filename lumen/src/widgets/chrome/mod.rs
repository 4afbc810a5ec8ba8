pub(crate) mod event;
pub(crate) mod view;

pub(crate) use self::event::ChromeEvent;
