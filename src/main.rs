use oldcounty::error::NewsletterError;

#[tokio::main]
async fn main() -> Result<(), NewsletterError> {
    oldcounty::app::run().await
}
