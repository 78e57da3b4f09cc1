pub(crate) mod atoms;
pub(crate) mod form_field;
pub(crate) mod movie_card;
pub(crate) mod shell;
pub(crate) mod toast;
