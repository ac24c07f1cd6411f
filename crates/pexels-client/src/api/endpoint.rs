/// Fixed upstream paths, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Search,
    Popular,
    Curated,
    VideoSearch,
    VideoPopular,
    /// Single photo lookup; the photo id is appended to the path.
    Photo,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::Search,
        Endpoint::Popular,
        Endpoint::Curated,
        Endpoint::VideoSearch,
        Endpoint::VideoPopular,
        Endpoint::Photo,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Search => "v1/search",
            Endpoint::Popular => "v1/popular",
            Endpoint::Curated => "v1/curated",
            Endpoint::VideoSearch => "videos/search",
            Endpoint::VideoPopular => "videos/popular",
            Endpoint::Photo => "v1/photos/",
        }
    }

    /// Whether the endpoint accepts width/duration bounds.
    pub const fn is_bounded(self) -> bool {
        matches!(self, Endpoint::VideoSearch | Endpoint::VideoPopular)
    }

    /// Join the endpoint path onto `base`, which must end with `/`.
    pub fn url(self, base: &str) -> String {
        format!("{base}{}", self.path())
    }
}
