use pihole_web::{PiholeClient, PiholeResult};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> PiholeResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = PiholeClient::builder()
        .host(std::env::var("PIHOLE_HOST").unwrap_or_else(|_| "pi.hole".to_string()))?
        .build()?;

    if let Ok(key) = std::env::var("PIHOLE_API_KEY") {
        client.login(&key).await?;
    }
    println!("Authenticated: {}", client.is_authenticated());

    let versions = client.versions().await?;
    println!(
        "Core {} / FTL {} / Web {}",
        versions.core.display(),
        versions.ftl.display(),
        versions.web.display()
    );

    let mut editor = client.dns_settings_editor();
    editor.mount().await?;

    let settings = &editor.state().settings;
    println!("Upstream servers: {:?}", settings.upstream_dns);
    println!(
        "Conditional forwarding: {} ({} via {})",
        settings.conditional_forwarding.enabled,
        settings.conditional_forwarding.domain,
        settings.conditional_forwarding.router_ip
    );
    println!(
        "Listening: {}, DNSSEC: {}",
        settings.options.listening_type.as_str(),
        settings.options.dnssec
    );
    println!("Form can be submitted: {}", editor.state().can_submit());

    editor.unmount();
    Ok(())
}
