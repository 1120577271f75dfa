//! Create a disposable mailbox and poll it once.
//!
//! Run with `RUST_LOG=info cargo run --example demo` to also see the proxy
//! notice when one of the proxy environment variables is set.

use tempmail_client::Client;

#[tokio::main]
async fn main() -> Result<(), tempmail_client::Error> {
    env_logger::init();

    let mut client = Client::new()?;

    let mailbox = client.create().await?;
    println!("Created mailbox: {}", mailbox.mailbox);

    let messages = client.get_messages().await?;
    println!("{} message(s) waiting", messages.len());
    for msg in messages {
        println!("- [{}] {}: {}", msg.id, msg.from, msg.subject);
    }

    Ok(())
}
