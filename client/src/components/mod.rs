//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render voyage chrome and interaction surfaces. The selection
//! widgets are domain-free value/options controls; the voyage form, sheet,
//! and table parameterize them and read shared state from context.

pub mod combo_box;
pub mod multi_select;
pub mod toast;
pub mod unit_type_list;
pub mod voyage_form;
pub mod voyage_sheet;
pub mod voyage_table;
