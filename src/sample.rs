use crate::model::Post;

/// Read-only sample data built once at startup and handed to the handlers.
#[derive(Debug, Clone)]
pub struct SamplePosts {
    /// The single post served by `GET /blog/post`.
    pub featured: Post,
    /// The five posts served by `GET /blog/posts`, in id order.
    pub feed: Vec<Post>,
}

impl SamplePosts {
    pub fn seed() -> Self {
        Self {
            featured: Post::new(
                1,
                "First Post",
                "This is the content of the first post.",
                "Admin",
            ),
            feed: vec![
                Post::new(
                    1,
                    "Tech News",
                    "AI is transforming the software industry at scale.",
                    "TechWriter",
                ),
                Post::new(
                    2,
                    "Weekly Report",
                    "Summary of all activities completed this week.",
                    "Manager",
                ),
                Post::new(
                    3,
                    "Event Announcement",
                    "Join us for the developer conference next month.",
                    "Admin",
                ),
                Post::new(
                    4,
                    "Product Release",
                    "Version 2.0 is now live with enhanced security!",
                    "ProductTeam",
                ),
                Post::new(
                    5,
                    "Maintenance Notice",
                    "Scheduled downtime on Sunday 2 AM - 4 AM.",
                    "OpsTeam",
                ),
            ],
        }
    }
}

impl Default for SamplePosts {
    fn default() -> Self {
        Self::seed()
    }
}
