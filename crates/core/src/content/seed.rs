//! First-boot seed payloads. Applied exactly once, when the content document
//! is first created; restarts never re-seed, even if an admin has emptied
//! every list since.

use serde_json::{json, Value};

pub fn faq_seed() -> Vec<Value> {
    vec![
        json!({
            "q": "When is the competition held?",
            "a": "The Mix Masters Club DJ Competition will be held on 22 May 2026.",
        }),
        json!({
            "q": "Where is the competition taking place?",
            "a": "The event will be hosted at HardRock Cafe, Singapore.",
        }),
        json!({
            "q": "What is Mix Masters Club?",
            "a": "Mix Masters Club is a one-time global DJ competition, bringing together DJs from different countries to compete live on one stage. This is not a recurring tournament or league; it is a single, high-impact showcase focused on DJ skill, creativity, and crowd control.",
        }),
        json!({
            "q": "Is this an international competition?",
            "a": "Yes. DJs participating in Mix Masters Club represent countries including Canada, the United States, Europe, Australia, India, Malaysia, Sri Lanka, and more.",
        }),
        json!({
            "q": "What are the prizes?",
            "a": "A total prize pool of up to SGD 20,000 will be given out. Full details will be announced soon.",
        }),
        json!({
            "q": "How are DJs judged?",
            "a": "DJs are evaluated by a panel of experienced industry professionals, including established DJs and music curators. Judging is based on technical skill, music selection, transitions and flow, creativity, and live crowd engagement. This is not a popularity or social media-based contest.",
        }),
        json!({
            "q": "Who can participate?",
            "a": "Participation is by application or invitation, subject to eligibility criteria set by the organisers. Full details will be announced soon.",
        }),
        json!({
            "q": "What music genres are allowed?",
            "a": "This is primarily a Tamil DJ battle. The competition focuses on DJ performance quality, not a single genre. DJs are encouraged to showcase their strongest musical identity while respecting the event guidelines.",
        }),
        json!({
            "q": "When will more details be released?",
            "a": "Details on competition format, judging criteria, and final DJ line-up will be announced closer to the event date via the official website and social channels.",
        }),
    ]
}

pub fn event_seed() -> Vec<Value> {
    vec![
        json!({
            "id": "mainsession-2026",
            "title": "Main Event – Night Circuit",
            "slug": "main-event-night-circuit",
            "date": "2026-05-22",
            "location": "Hard Rock Cafe, Singapore",
            "status": "Active",
            "mediaType": "video",
            "mediaUrl": "https://cdn.coverr.co/videos/coverr-nightclub-neon-dj-performance-1578/1080p.mp4",
            "posterUrl": "https://images.unsplash.com/photo-1522851457198-d820fd909c09?auto=format&fit=crop&q=80&w=1200",
            "image": "https://images.unsplash.com/photo-1522851457198-d820fd909c09?auto=format&fit=crop&q=80&w=1200",
            "isMainEvent": true,
            "description": "The flagship mix battle, with DJs representing the global Tamil community.",
            "price": "SGD 20,000 prize pool",
        }),
        json!({
            "id": "afterglow-qualifier",
            "title": "Afterglow Qualifier",
            "slug": "afterglow-qualifier",
            "date": "2026-05-19",
            "location": "Singapore Arts Club",
            "status": "Upcoming",
            "mediaType": "image",
            "mediaUrl": "https://images.unsplash.com/photo-1470229722913-7ea2d9863438?auto=format&fit=crop&q=80&w=1200",
            "posterUrl": "https://images.unsplash.com/photo-1522851457198-d820fd909c09?auto=format&fit=crop&q=80&w=1200",
            "image": "https://images.unsplash.com/photo-1522851457198-d820fd909c09?auto=format&fit=crop&q=80&w=1200",
            "isMainEvent": false,
            "description": "Qualify for the showcase with your most daring set.",
            "price": "Early bird: SGD 35",
        }),
    ]
}

pub fn judge_seed() -> Vec<Value> {
    vec![
        json!({
            "id": "judge-arya",
            "name": "Arya Patel",
            "title": "Global Selector",
            "country": "Singapore",
            "mediaType": "image",
            "mediaUrl": "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?auto=format&fit=crop&q=80&w=1200",
            "image": "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?auto=format&fit=crop&q=80&w=1200",
            "quote": "Precision, grit, and crowd chemistry.",
        }),
        json!({
            "id": "judge-samar",
            "name": "Samar Iyer",
            "title": "Bass Architect",
            "country": "India",
            "mediaType": "image",
            "mediaUrl": "https://images.unsplash.com/photo-1598387993441-a364f854c3e1?auto=format&fit=crop&q=80&w=1200",
            "image": "https://images.unsplash.com/photo-1598387993441-a364f854c3e1?auto=format&fit=crop&q=80&w=1200",
            "quote": "The best mixes tell a story and honor the room.",
        }),
    ]
}

pub fn gallery_seed() -> Vec<Value> {
    vec![
        json!({
            "id": "gallery-electric",
            "type": "video",
            "url": "https://cdn.coverr.co/videos/coverr-dancing-crowd-at-a-music-festival-5149/1080p.mp4",
            "poster": "https://images.unsplash.com/photo-1470229722913-7ea2d9863438?auto=format&fit=crop&q=80&w=1200",
            "instagramUrl": "https://instagram.com/mixmastersclub",
        }),
        json!({
            "id": "gallery-light",
            "type": "image",
            "url": "https://images.unsplash.com/photo-1545128485-c400e7702796?auto=format&fit=crop&q=80&w=1200",
            "poster": "",
            "instagramUrl": "https://instagram.com/mixmastersclub",
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::SiteContent;

    #[test]
    fn seeds_have_expected_shape() {
        assert_eq!(faq_seed().len(), 9);
        assert_eq!(event_seed().len(), 2);
        assert_eq!(judge_seed().len(), 2);
        assert_eq!(gallery_seed().len(), 2);

        for event in event_seed() {
            assert!(event["id"].as_str().is_some_and(|id| !id.is_empty()));
        }
    }

    #[test]
    fn exactly_one_seeded_main_event() {
        let mut content = SiteContent::default();
        content.events = event_seed();
        let main = content.main_event().unwrap();
        assert_eq!(main["id"], "mainsession-2026");
        assert_eq!(main["status"], "Active");
    }
}
