//! UI Components
//!
//! Leptos components of the program form.

mod calendar;
mod date_picker;
mod draft_form;
mod drop_zone;
mod item_row;
mod message_preview;
mod program_list;
mod share_button;

pub use calendar::Calendar;
pub use date_picker::DatePicker;
pub use draft_form::DraftForm;
pub use drop_zone::DropZone;
pub use item_row::ItemRow;
pub use message_preview::MessagePreview;
pub use program_list::ProgramList;
pub use share_button::ShareButton;
