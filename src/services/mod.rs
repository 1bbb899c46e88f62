// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod goals;
pub mod mailer;
pub mod media;
pub mod report;
pub mod tracker;

pub use mailer::MailerService;
pub use media::MediaService;
pub use tracker::Limit;
