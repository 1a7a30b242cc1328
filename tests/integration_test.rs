use taco_shop::clients::{CheckoutResult, SessionHandle};
use taco_shop::lifecycle::TacoShop;
use taco_shop::model::{OrderFields, TacoSubmission};
use taco_shop::order_flow::OrderFlowError;
use taco_shop::validation::{Field, GLOBAL_BANNER};

fn good_fields() -> OrderFields {
    OrderFields::new(
        "Ima Hungry",
        "1234 Culinary Blvd.",
        "Foodsville",
        "CO",
        "81019",
        "4111111111111111",
        "10/19",
        "123",
    )
}

async fn design_and_submit(shop: &TacoShop, session: &str, name: &str, ingredients: &[&str]) {
    // The design step always shows five groups of two ingredients.
    let design = shop.order_flow.design_view();
    assert_eq!(design.groups.len(), 5);
    for group in &design.groups {
        assert_eq!(group.ingredients.len(), 2);
    }

    let submission = TacoSubmission::new(name, ingredients.iter().copied());
    shop.order_flow
        .submit_taco(session.to_string(), submission)
        .await
        .expect("Failed to submit taco");
}

/// Happy path: design two tacos, fill in the order form, land back home
/// with an empty session and one fulfilled order.
#[tokio::test]
async fn design_two_tacos_and_check_out() {
    let shop = TacoShop::new();
    let session = shop.order_flow.open_session().await.unwrap();

    design_and_submit(&shop, &session, "Basic Taco", &["FLTO", "GRBF", "CHED", "TMTO", "SLSA"])
        .await;
    shop.order_flow.start_another(session.clone()).await.unwrap();
    design_and_submit(&shop, &session, "Another Taco", &["COTO", "CARN", "JACK", "LETC", "SRCR"])
        .await;

    let view = shop.order_flow.order_view(session.clone()).await.unwrap();
    assert_eq!(view.order.taco_count(), 2);
    assert!(view.violations.is_empty());

    let result = shop
        .order_flow
        .submit_order(session.clone(), good_fields())
        .await
        .unwrap();

    match result {
        CheckoutResult::Finalized(order) => {
            assert_eq!(order.taco_count(), 2);
            assert_eq!(order.tacos[0].name, "Basic Taco");
            assert_eq!(order.tacos[1].name, "Another Taco");
            assert_eq!(order.delivery_name, "Ima Hungry");
        }
        other => panic!("expected finalized order, got {other:?}"),
    }

    // Session is back at the start: empty order, no violations.
    let view = shop.order_flow.order_view(session).await.unwrap();
    assert!(view.order.is_empty());
    assert!(view.violations.is_empty());

    assert_eq!(shop.finalized().len(), 1);
    shop.shutdown().await.expect("Failed to shutdown system");
}

/// Submitting the order form empty produces all nine violations; fixing the
/// fields afterwards finalizes the same order.
#[tokio::test]
async fn empty_order_form_shows_all_violations() {
    let shop = TacoShop::new();
    let session = shop.order_flow.open_session().await.unwrap();

    design_and_submit(&shop, &session, "Basic Taco", &["FLTO", "GRBF", "CHED", "TMTO", "SLSA"])
        .await;

    let result = shop
        .order_flow
        .submit_order(session.clone(), OrderFields::default())
        .await
        .unwrap();

    let violations = match result {
        CheckoutResult::Rejected { order, violations } => {
            assert_eq!(order.taco_count(), 1, "tacos must survive a failed checkout");
            violations
        }
        other => panic!("expected rejection, got {other:?}"),
    };

    assert_eq!(violations.len(), 9);
    let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
    for expected in [
        GLOBAL_BANNER,
        "Name is required",
        "Street is required",
        "City is required",
        "State is required",
        "Zip code is required",
        "Not a valid credit card number",
        "Must be formatted MM/YY",
        "Invalid CVV",
    ] {
        assert!(messages.contains(&expected), "missing: {expected}");
    }

    // The order page re-presents the violation set.
    let view = shop.order_flow.order_view(session.clone()).await.unwrap();
    assert_eq!(view.violations.len(), 9);

    let result = shop
        .order_flow
        .submit_order(session, good_fields())
        .await
        .unwrap();
    assert!(matches!(result, CheckoutResult::Finalized(_)));

    shop.shutdown().await.unwrap();
}

/// Bad payment details with valid delivery details: the banner plus the
/// three payment messages, nothing else.
#[tokio::test]
async fn invalid_payment_details_show_four_violations() {
    let shop = TacoShop::new();
    let session = shop.order_flow.open_session().await.unwrap();

    design_and_submit(&shop, &session, "Basic Taco", &["FLTO", "GRBF", "CHED", "TMTO", "SLSA"])
        .await;

    // Terse delivery values are fine; only the payment fields are wrong.
    let fields = OrderFields::new("I", "1", "F", "C", "8", "1234432112344322", "14/91", "1234");
    let result = shop
        .order_flow
        .submit_order(session.clone(), fields)
        .await
        .unwrap();

    let violations = match result {
        CheckoutResult::Rejected { violations, .. } => violations,
        other => panic!("expected rejection, got {other:?}"),
    };

    assert_eq!(violations.len(), 4);
    assert_eq!(violations[0].field, Field::Global);
    let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
    assert!(messages.contains(&"Not a valid credit card number"));
    assert!(messages.contains(&"Must be formatted MM/YY"));
    assert!(messages.contains(&"Invalid CVV"));

    let result = shop
        .order_flow
        .submit_order(session, good_fields())
        .await
        .unwrap();
    assert!(matches!(result, CheckoutResult::Finalized(_)));

    shop.shutdown().await.unwrap();
}

/// Checkout with no tacos is rejected as a policy error, both on a fresh
/// session and immediately after a successful finalize.
#[tokio::test]
async fn checkout_on_empty_order_is_rejected() {
    let shop = TacoShop::new();
    let session = shop.order_flow.open_session().await.unwrap();

    let err = shop
        .order_flow
        .submit_order(session.clone(), good_fields())
        .await
        .unwrap_err();
    assert_eq!(err, OrderFlowError::EmptyOrder);

    design_and_submit(&shop, &session, "Basic Taco", &["FLTO", "GRBF"]).await;
    let result = shop
        .order_flow
        .submit_order(session.clone(), good_fields())
        .await
        .unwrap();
    assert!(matches!(result, CheckoutResult::Finalized(_)));

    // The finalize reset the session, so a repeat submission has no items.
    let err = shop
        .order_flow
        .submit_order(session, good_fields())
        .await
        .unwrap_err();
    assert_eq!(err, OrderFlowError::EmptyOrder);

    assert_eq!(shop.finalized().len(), 1);
    shop.shutdown().await.unwrap();
}

/// Sessions are isolated: concurrent customers never see each other's
/// tacos, and closing one session does not disturb another.
#[tokio::test]
async fn concurrent_sessions_stay_isolated() {
    let shop = TacoShop::new();

    let mut handles = vec![];
    for i in 0..8 {
        let order_flow = shop.order_flow.clone();
        handles.push(tokio::spawn(async move {
            let session = order_flow.open_session().await.unwrap();
            for n in 0..=i {
                let submission = TacoSubmission::new(format!("Taco {n}"), ["FLTO", "GRBF"]);
                order_flow.submit_taco(session.clone(), submission).await.unwrap();
            }
            let view = order_flow.order_view(session.clone()).await.unwrap();
            (session, view.order.taco_count(), i + 1)
        }));
    }

    let mut sessions = vec![];
    for handle in handles {
        let (session, count, expected) = handle.await.unwrap();
        assert_eq!(count, expected, "each session holds only its own tacos");
        sessions.push(session);
    }

    // Closing one session leaves the others intact.
    shop.order_flow.close(sessions[0].clone()).await.unwrap();
    let err = shop.order_flow.order_view(sessions[0].clone()).await.unwrap_err();
    assert_eq!(err, OrderFlowError::SessionExpired(sessions[0].clone()));

    let view = shop.order_flow.order_view(sessions[1].clone()).await.unwrap();
    assert_eq!(view.order.taco_count(), 2);

    shop.shutdown().await.unwrap();
}
