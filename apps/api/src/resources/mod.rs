// Resources: people with skills, rates and availability.
// Listing is a full backend fetch followed by the shared search filter;
// new resources pass the intake checks before they are forwarded.

pub mod handlers;
pub mod intake;
