use anyhow::Result;

use crate::client::WavepipeClient;

/// The JSON endpoints exercised by a smoke run, in order. Logout goes last
/// so the session stays valid for the calls before it.
pub const SMOKE_ENDPOINTS: &[&str] = &[
    "/api/v0/albums",
    "/api/v0/albums/1",
    "/api/v0/artists",
    "/api/v0/artists/1",
    "/api/v0/folders",
    "/api/v0/folders/1",
    "/api/v0/search/song",
    "/api/v0/songs",
    "/api/v0/songs/1",
    "/api/v0/status",
    "/api/v0/logout",
];

/// Walk the fixed endpoint list, printing each resource path and its
/// response body. The first failure aborts the run.
pub async fn run(client: &WavepipeClient) -> Result<()> {
    for resource in SMOKE_ENDPOINTS {
        println!("{resource}:");
        let body = client.fetch(resource).await?;
        println!("{body}\n");
    }

    Ok(())
}
