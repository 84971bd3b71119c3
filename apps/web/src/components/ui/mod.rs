mod button;

pub(crate) use button::Button;
