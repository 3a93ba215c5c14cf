//! Parse a few sample order messages and print the replies.
//!
//! Run with: cargo run -p kirana-agent-parser --example parse_order

use kirana_agent_parser::{compose_reply, OrderParser};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let parser = OrderParser::default();

    let test_orders = [
        "2 kg atta aur 1 litre milk chahiye",
        "5 packet biscuit and 500 gm sugar",
        "1 kg chawal, 2 litre doodh",
        "10 piece bread and 1 bottle oil",
    ];

    for order_text in test_orders {
        println!("\nOrder: {order_text}");
        let parsed = parser.parse(order_text);
        println!("Parsed: {}", serde_json::to_string_pretty(&parsed)?);
        println!("Reply:\n{}", compose_reply(&parsed, "Rajesh"));
    }

    Ok(())
}
