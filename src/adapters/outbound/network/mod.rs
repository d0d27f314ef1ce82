/// Network adapters for external API calls
mod endoflife_client;

pub use endoflife_client::EndOfLifeClient;
