//! Community board commands.

use log::info;
use sfh_core::backend::CommunityBackend;
use sfh_core::client::HttpClient;
use sfh_core::community::PostSort;

pub async fn list_posts(client: &HttpClient, sort: PostSort, search: &str) -> anyhow::Result<()> {
    let posts = client.posts(sort, search.trim()).await?;
    for post in &posts {
        println!(
            "{:>6}  {}  [{}] {} views, {} likes",
            post.id, post.title, post.nickname, post.view, post.like_count
        );
    }
    info!("{} posts (sort={})", posts.len(), sort.as_str());
    Ok(())
}
