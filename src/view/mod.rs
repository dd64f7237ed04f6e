pub mod listing;
mod modals;
mod panels;
