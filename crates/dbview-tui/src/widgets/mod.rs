//! Custom widget components

mod data_panel;
mod data_table;
mod detail_modal;
mod error_modal;
mod footer;
mod header;
pub mod modal_overlay;
mod table_info;
mod table_list;
pub mod wrap;

pub use data_panel::DataPanelWidget;
pub use data_table::DataTable;
pub use detail_modal::DetailModal;
pub use error_modal::ErrorModal;
pub use footer::Footer;
pub use header::MainHeader;
pub use table_info::TableInfoPanel;
pub use table_list::TableList;
