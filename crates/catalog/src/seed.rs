//! Hardcoded sample catalog shown on the mock portal.

use devportal_core::DomainResult;

use crate::catalog::Catalog;
use crate::product::{Product, Rating};

/// The six products of the portal screen, in display order.
///
/// Three are flagged top pick; ratings are validated on construction.
pub fn sample_catalog() -> DomainResult<Catalog> {
    Ok(Catalog::new(vec![
        Product::new(
            "Corporate Payments",
            Rating::new(3.0)?,
            14,
            "APIs for corporate money transfers to own accounts, third party accounts and external accounts.",
        )
        .top_pick(),
        Product::new(
            "Corporate Collections",
            Rating::new(4.0)?,
            7,
            "APIs that offer services for recurring deposit and fixed deposit.",
        )
        .top_pick(),
        Product::new("UPI", Rating::new(4.0)?, 9, "APIs that offer services for UPI transactions.")
            .top_pick(),
        Product::new("Bill Payments", Rating::new(5.0)?, 3, "APIs that offer services for Bill Payments"),
        Product::new(
            "Corporate Services",
            Rating::new(4.0)?,
            2,
            "APIs that offer services for recurring deposit and fixed deposit.",
        ),
        Product::new("Loans", Rating::new(1.0)?, 2, "APIs that offer services for Loan."),
    ]))
}
