pub mod listing;
pub mod search;

pub use listing::{
    group_venues_by_area, partition_shows, upcoming_show_counts, ShowCard, ShowPartition,
    VenueArea, VenueSummary,
};
pub use search::{search_by_name, Named, SearchHit, SearchResults};
