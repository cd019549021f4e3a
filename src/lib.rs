//! Inquiry Wizard - Multi-step inquiry form widget
//!
//! A step wizard that collects contact, billing and service details,
//! validates them field by field, shows a review and delivers the result
//! to a lead endpoint. Hosts mount an `InquiryWidget`, feed it field
//! events and draw the `WizardView` snapshots it renders.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
