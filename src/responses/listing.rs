use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;
use entities::{artist, show, venue};
use serde::Serialize;

use crate::datetime::{format_naive, DateFormat};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing one (city, state) pair.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// The other side of a show: the artist on a venue page, the venue on an artist page.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShowCard {
    pub id: i32,
    pub name: String,
    pub image_link: Option<String>,
    pub start_time: String,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowPartition {
    pub past: Vec<ShowCard>,
    pub upcoming: Vec<ShowCard>,
}

pub trait Counterpart {
    fn card(&self, start_time: &NaiveDateTime) -> ShowCard;
}

impl Counterpart for artist::Model {
    fn card(&self, start_time: &NaiveDateTime) -> ShowCard {
        ShowCard {
            id: self.id,
            name: self.name.to_owned(),
            image_link: self.image_link.to_owned(),
            start_time: format_naive(start_time, DateFormat::Full),
        }
    }
}

impl Counterpart for venue::Model {
    fn card(&self, start_time: &NaiveDateTime) -> ShowCard {
        ShowCard {
            id: self.id,
            name: self.name.to_owned(),
            image_link: self.image_link.to_owned(),
            start_time: format_naive(start_time, DateFormat::Full),
        }
    }
}

/// Counts shows starting strictly after `now`, grouped by `key`.
pub fn upcoming_show_counts<'a, I, F>(shows: I, now: NaiveDateTime, key: F) -> HashMap<i32, usize>
where
    I: IntoIterator<Item = &'a show::Model>,
    F: Fn(&show::Model) -> i32,
{
    let mut counts = HashMap::new();
    for show in shows {
        if show.start_time > now {
            *counts.entry(key(show)).or_insert(0) += 1;
        }
    }
    counts
}

pub fn group_venues_by_area(
    venues: Vec<venue::Model>,
    shows: &[show::Model],
    now: NaiveDateTime,
) -> Vec<VenueArea> {
    let counts = upcoming_show_counts(shows, now, |show| show.venue_id);
    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
            name: venue.name,
        };
        areas
            .entry((venue.city, venue.state))
            .or_default()
            .push(summary);
    }
    areas
        .into_iter()
        .map(|((city, state), venues)| VenueArea {
            city,
            state,
            venues,
        })
        .collect()
}

/// Splits shows around `now`. A show starting exactly at `now` lands in neither list.
pub fn partition_shows<C: Counterpart>(
    shows: Vec<(show::Model, C)>,
    now: NaiveDateTime,
) -> ShowPartition {
    let mut partition = ShowPartition::default();
    for (show, counterpart) in shows {
        match show.start_time.cmp(&now) {
            Ordering::Less => partition.past.push(counterpart.card(&show.start_time)),
            Ordering::Greater => partition.upcoming.push(counterpart.card(&show.start_time)),
            Ordering::Equal => {}
        }
    }
    partition
}
