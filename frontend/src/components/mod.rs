pub mod carousel;
pub mod lead_form;
pub mod modal;
pub mod particles;
pub mod reveal;
pub mod section_grid;
