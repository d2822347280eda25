// Fetch a GitHub user profile as a typed value.
//
//     cargo run --example github_user

use rfetch_net::{fetch_resource, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GithubUser {
    login: String,
    id: u64,
    avatar_url: String,
    html_url: String,
    name: Option<String>,
    company: Option<String>,
    blog: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    public_repos: u64,
    followers: u64,
    following: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let user: GithubUser = fetch_resource("https://api.github.com/users/octocat", None).await?;

    println!("{} (#{})", user.login, user.id);
    if let Some(name) = &user.name {
        println!("name:      {name}");
    }
    if let Some(company) = &user.company {
        println!("company:   {company}");
    }
    if let Some(location) = &user.location {
        println!("location:  {location}");
    }
    if let Some(blog) = &user.blog {
        println!("blog:      {blog}");
    }
    if let Some(bio) = &user.bio {
        println!("bio:       {bio}");
    }
    println!("profile:   {}", user.html_url);
    println!("avatar:    {}", user.avatar_url);
    println!(
        "repos: {}  followers: {}  following: {}",
        user.public_repos, user.followers, user.following
    );

    Ok(())
}
