pub(crate) const KEY: &[u8] = include_bytes!("../assets/svg/key.svg");
pub(crate) const EYE: &[u8] = include_bytes!("../assets/svg/eye.svg");
pub(crate) const EYE_OFF: &[u8] = include_bytes!("../assets/svg/eye-off.svg");
pub(crate) const SETTINGS: &[u8] =
    include_bytes!("../assets/svg/settings.svg");
