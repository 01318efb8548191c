//! Small state machines behind the page's decorative behaviour. They hold no
//! DOM handles; the frontend applies their decisions.

pub mod carousel;
pub mod modal;
pub mod particles;
pub mod reveal;
pub mod scroll;
