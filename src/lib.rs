//! Deterministic personal-finance calculators for PaisaPop: tax regime
//! comparison, inflation projection, goal SIP sizing, loan prepayment advice
//! and a few household planning helpers, plus the JSON API that serves them.

pub mod api;
pub mod core;
