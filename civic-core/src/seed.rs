//! Sample municipal events used to populate a fresh catalog.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::event::Event;

struct Sample {
    title: &'static str,
    category: &'static str,
    days_out: i64,
    start_hour: u32,
    end_hour: Option<u32>,
    location: &'static str,
    description: &'static str,
    tag: &'static str,
    announcement: bool,
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "Community Clean-up Day",
        category: "Community",
        days_out: 2,
        start_hour: 9,
        end_hour: Some(13),
        location: "Greenfield Park",
        description: "Join your neighbours to clean public spaces and learn about recycling initiatives.",
        tag: "Environment",
        announcement: false,
    },
    Sample {
        title: "Water Conservation Workshop",
        category: "Utilities",
        days_out: 4,
        start_hour: 10,
        end_hour: Some(12),
        location: "Municipal Hall",
        description: "Interactive session on saving water and understanding current restrictions.",
        tag: "Water",
        announcement: false,
    },
    Sample {
        title: "Youth Career Fair",
        category: "Education",
        days_out: 6,
        start_hour: 11,
        end_hour: None,
        location: "Civic Centre",
        description: "Local businesses and tertiary institutions share opportunities for young people.",
        tag: "Youth",
        announcement: false,
    },
    Sample {
        title: "Road Maintenance Schedule - Ward 12",
        category: "Roads",
        days_out: 1,
        start_hour: 8,
        end_hour: None,
        location: "Ward 12",
        description: "Announcement on planned resurfacing causing temporary lane closures.",
        tag: "Maintenance",
        announcement: true,
    },
    Sample {
        title: "Community Health Screening",
        category: "Health",
        days_out: 8,
        start_hour: 9,
        end_hour: Some(15),
        location: "Newtown Clinic",
        description: "Free health screenings including blood pressure, diabetes, and vaccinations.",
        tag: "Screening",
        announcement: false,
    },
    Sample {
        title: "Library Storytelling Morning",
        category: "Culture",
        days_out: 3,
        start_hour: 10,
        end_hour: None,
        location: "Central Library",
        description: "Family-friendly storytelling with local authors.",
        tag: "Family",
        announcement: false,
    },
    Sample {
        title: "Waste Collection Update",
        category: "Sanitation",
        days_out: 5,
        start_hour: 7,
        end_hour: None,
        location: "Citywide",
        description: "Notice on adjusted waste collection routes due to public holiday.",
        tag: "Waste",
        announcement: true,
    },
    Sample {
        title: "Farmers' Market Weekend",
        category: "Community",
        days_out: 9,
        start_hour: 8,
        end_hour: Some(14),
        location: "Harbour Square",
        description: "Sample locally grown produce, live music and crafts from community vendors.",
        tag: "Market",
        announcement: false,
    },
    Sample {
        title: "Emergency Preparedness Drill",
        category: "Safety",
        days_out: 7,
        start_hour: 14,
        end_hour: None,
        location: "Disaster Management Centre",
        description: "Public demonstration on household emergency plans and evacuation procedures.",
        tag: "Emergency",
        announcement: true,
    },
    Sample {
        title: "Senior Fitness Morning",
        category: "Health",
        days_out: 10,
        start_hour: 9,
        end_hour: None,
        location: "Waterfront Promenade",
        description: "Low-impact exercises led by municipal wellness coaches for residents over 60.",
        tag: "Wellness",
        announcement: false,
    },
    Sample {
        title: "Art Exhibition Opening Night",
        category: "Culture",
        days_out: 11,
        start_hour: 18,
        end_hour: None,
        location: "Heritage Gallery",
        description: "Celebrating local artists with live performances and curator walkabouts.",
        tag: "Art",
        announcement: false,
    },
    Sample {
        title: "Entrepreneurship Bootcamp",
        category: "Business",
        days_out: 12,
        start_hour: 9,
        end_hour: Some(16),
        location: "Innovation Hub",
        description: "Workshops and mentorship for emerging small business owners.",
        tag: "Entrepreneurship",
        announcement: false,
    },
    Sample {
        title: "Public Transport Feedback Session",
        category: "Transport",
        days_out: 3,
        start_hour: 17,
        end_hour: None,
        location: "Civic Auditorium",
        description: "Share your feedback on bus and rail services with transit planners.",
        tag: "Engagement",
        announcement: false,
    },
    Sample {
        title: "Tree Planting Campaign",
        category: "Environment",
        days_out: 15,
        start_hour: 9,
        end_hour: None,
        location: "Riverbend Nature Reserve",
        description: "Volunteer to plant indigenous trees and learn about water-wise gardening.",
        tag: "Trees",
        announcement: false,
    },
    Sample {
        title: "Holiday Lights Parade",
        category: "Culture",
        days_out: 20,
        start_hour: 19,
        end_hour: None,
        location: "Main Street",
        description: "Evening parade featuring community groups, marching bands and festive displays.",
        tag: "Festival",
        announcement: false,
    },
    Sample {
        title: "Digital Literacy Class",
        category: "Education",
        days_out: 5,
        start_hour: 15,
        end_hour: None,
        location: "Community ICT Lab",
        description: "Beginner course on using municipal online services and staying safe online.",
        tag: "Technology",
        announcement: false,
    },
    Sample {
        title: "Township Sports Day",
        category: "Sports",
        days_out: 13,
        start_hour: 8,
        end_hour: Some(17),
        location: "Umlazi Sports Complex",
        description: "Soccer, netball and athletics tournaments supporting youth development programmes.",
        tag: "Youth",
        announcement: false,
    },
    Sample {
        title: "Housing Subsidy Information Session",
        category: "Housing",
        days_out: 4,
        start_hour: 18,
        end_hour: None,
        location: "Ward 5 Multi-purpose Centre",
        description: "Learn about qualifying criteria and application timelines for municipal housing support.",
        tag: "Support",
        announcement: false,
    },
    Sample {
        title: "Water Service Interruption Notice",
        category: "Utilities",
        days_out: 1,
        start_hour: 6,
        end_hour: None,
        location: "Northdale",
        description: "Urgent maintenance on the main supply line will cause temporary outages in select suburbs.",
        tag: "Maintenance",
        announcement: true,
    },
];

/// The fixed sample events, dated relative to `today`.
///
/// Each event is tagged with its category, one topical tag, and the month it
/// starts in (`YYYY-MM`), which is what the month tag bonus matches against.
pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    SAMPLES.iter().map(|s| s.to_event(today)).collect()
}

impl Sample {
    fn to_event(&self, today: NaiveDate) -> Event {
        let day = today + Duration::days(self.days_out);
        let start = at_hour(day, self.start_hour);

        let mut event = Event::new(self.title, self.category, start)
            .with_location(self.location)
            .with_description(self.description)
            .with_tags([
                self.category.to_string(),
                self.tag.to_string(),
                day.format("%Y-%m").to_string(),
            ]);

        if let Some(end_hour) = self.end_hour {
            event = event.with_end(at_hour(day, end_hour));
        }
        if self.announcement {
            event = event.announcement();
        }
        event
    }
}

fn at_hour(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_time(chrono::NaiveTime::MIN) + Duration::hours(i64::from(hour))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 30).unwrap()
    }

    #[test]
    fn test_sample_events_shape() {
        let events = sample_events(today());

        assert_eq!(events.len(), 19);
        assert_eq!(events.iter().filter(|e| e.is_announcement).count(), 4);
        assert!(events.iter().all(|e| e.start_date() > today()));
        assert!(
            events
                .iter()
                .all(|e| e.start_date() <= today() + Duration::days(20))
        );
    }

    #[test]
    fn test_sample_events_carry_month_tag() {
        let events = sample_events(today());
        let cleanup = events
            .iter()
            .find(|e| e.title == "Community Clean-up Day")
            .unwrap();

        // Two days after Jan 30 is Feb 1
        assert!(cleanup.has_tag("2025-02"));
        assert!(cleanup.has_tag("community"));
        assert_eq!(cleanup.end.unwrap().time(), chrono::NaiveTime::from_hms_opt(13, 0, 0).unwrap());
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let events = sample_events(today());
        let ids: std::collections::HashSet<_> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), events.len());
    }
}
