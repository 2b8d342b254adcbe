//! Before/after walkthroughs, one per principle.
//!
//! Each walkthrough builds the anti-pattern and the refactoring side by side
//! and reports what both produced as JSON.

use anyhow::Context;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use solid_core::{Order, OrderId, Product, Profile, UserId};

use crate::config::{DemoConfig, Principle};

/// Outcome of one walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub principle: &'static str,
    pub before: Value,
    pub after: Value,
}

/// Run the configured walkthroughs in order.
pub fn run(config: &DemoConfig) -> anyhow::Result<Vec<Report>> {
    config
        .principles
        .iter()
        .map(|&principle| -> anyhow::Result<Report> {
            let span = tracing::info_span!("walkthrough", principle = %principle);
            let _guard = span.enter();

            let report = run_one(principle)
                .with_context(|| format!("{principle} walkthrough failed"))?;
            info!(before = %report.before, after = %report.after, "walkthrough finished");
            Ok(report)
        })
        .collect()
}

fn run_one(principle: Principle) -> anyhow::Result<Report> {
    let (before, after) = match principle {
        Principle::SingleResponsibility => single_responsibility()?,
        Principle::OpenClosed => open_closed()?,
        Principle::LiskovSubstitution => liskov_substitution()?,
        Principle::InterfaceSegregation => interface_segregation()?,
        Principle::DependencyInversion => dependency_inversion()?,
    };
    Ok(Report {
        principle: principle.code(),
        before,
        after,
    })
}

fn sample_orders() -> Vec<Order> {
    vec![
        Order::new(OrderId::new(), UserId::new(1), 120.0),
        Order::new(OrderId::new(), UserId::new(2), 35.5),
    ]
}

fn single_responsibility() -> anyhow::Result<(Value, Value)> {
    use solid_srp::{after, before};

    let orders = sample_orders();

    let mut tangled = before::OrderService::new();
    let mut before_invoices = Vec::new();
    for order in &orders {
        tangled.place_order(order.clone());
        before_invoices.push(tangled.generate_invoice(order));
    }

    let mut service = after::OrderService::new();
    let generator = after::InvoiceGenerator::new();
    for order in &orders {
        service.place_order(order.clone());
    }
    let after_invoices: Vec<String> = service
        .orders()
        .iter()
        .map(|o| generator.generate_invoice(o))
        .collect();

    Ok((
        json!({ "orders": tangled.orders.len(), "invoices": before_invoices }),
        json!({
            "orders": serde_json::to_value(service.orders())?,
            "invoices": after_invoices,
        }),
    ))
}

fn open_closed() -> anyhow::Result<(Value, Value)> {
    use solid_ocp::after::{DiscountRule, PercentageDiscount, StandardDiscount, VipDiscount};
    use solid_ocp::{after, before};

    let laptop = Product::new("Laptop", 1200.0);

    let flagged = json!({
        "standard": laptop.price - before::apply_discount(&laptop, false),
        "vip": laptop.price - before::apply_discount(&laptop, true),
    });

    // A new policy is just another rule; calculate_price is untouched.
    let rules: Vec<(&str, Box<dyn DiscountRule>)> = vec![
        ("standard", Box::new(StandardDiscount)),
        ("vip", Box::new(VipDiscount)),
        ("seasonal", Box::new(PercentageDiscount::new(0.35)?)),
    ];
    let strategies: serde_json::Map<String, Value> = rules
        .iter()
        .map(|(name, rule)| (name.to_string(), json!(after::calculate_price(&laptop, rule))))
        .collect();

    Ok((flagged, Value::Object(strategies)))
}

fn liskov_substitution() -> anyhow::Result<(Value, Value)> {
    use solid_lsp::after::{self, CatalogProduct, DiscountedProduct};
    use solid_lsp::before::{self, DiscountedProduct as OldDiscounted, RegularProduct};

    let mut lamp = OldDiscounted {
        name: "Lamp".into(),
        price: 40.0,
    };
    let mut gift_card = RegularProduct {
        name: "Gift card".into(),
        price: 50.0,
    };
    before::apply_discounts(&mut [&mut lamp, &mut gift_card]);

    let mut promoted = vec![
        DiscountedProduct::new(CatalogProduct::new("Lamp", 40.0)),
        DiscountedProduct::new(CatalogProduct::new("Desk", 300.0)),
    ];
    // Gift cards are not Discountable, so they cannot end up in this call.
    let untouched = CatalogProduct::new("Gift card", 50.0);
    after::apply_discounts_to(promoted.iter_mut());

    Ok((
        json!({ "discounted": serde_json::to_value(&lamp)?, "regular": serde_json::to_value(&gift_card)? }),
        json!({
            "discounted": serde_json::to_value(promoted.iter().map(|p| p.product()).collect::<Vec<_>>())?,
            "not_discountable": serde_json::to_value(&untouched)?,
        }),
    ))
}

fn interface_segregation() -> anyhow::Result<(Value, Value)> {
    use solid_isp::InMemoryUserDirectory;
    use solid_isp::after::{UserProfileManager, order_history, sign_up};
    use solid_isp::before::{UserManager, register_from_form};

    let mut legacy = InMemoryUserDirectory::new();
    register_from_form(&mut legacy, "bob", "hunter2")?;
    let bob = UserManager::login(&legacy, "bob", "hunter2")?;

    let mut directory = InMemoryUserDirectory::new();
    let alice = sign_up(&mut directory, "alice", "correct horse")?;
    UserProfileManager::update_profile(
        &mut directory,
        alice.id,
        Profile {
            full_name: "Alice Doe".into(),
            contact_email: "alice@example.com".into(),
            ..Profile::default()
        },
    )?;
    for total in [19.99, 5.01] {
        directory.record_order(Order::new(OrderId::new(), alice.id, total))?;
    }
    let history = order_history(&directory, alice.id)?;

    Ok((
        json!({ "registered": serde_json::to_value(&bob)? }),
        json!({
            "user": serde_json::to_value(&alice)?,
            "profile": serde_json::to_value(directory.profile(alice.id))?,
            "orders": history.orders.len(),
            "total_spent": history.total_spent,
        }),
    ))
}

fn dependency_inversion() -> anyhow::Result<(Value, Value)> {
    use solid_dip::after::{self, Notifier, OrderProcessor};
    use solid_dip::before;

    let mut welded = before::OrderProcessor::new(before::EmailNotifier::new("shop@example.com"));
    welded.complete_purchase("alice@example.com", "Keyboard");

    fn purchase<N: Notifier>(notifier: N, contact: &str) -> N {
        let mut processor = OrderProcessor::new(notifier);
        processor.complete_purchase(contact, "Keyboard");
        processor.into_notifier()
    }
    let email = purchase(after::EmailNotifier::new("shop@example.com"), "alice@example.com");
    let sms = purchase(after::SmsNotifier::new("SHOP"), "+15550100");

    let mut sent = email.sent().to_vec();
    sent.extend_from_slice(sms.sent());

    Ok((
        serde_json::to_value(welded.notifier().sent())?,
        serde_json::to_value(sent)?,
    ))
}
