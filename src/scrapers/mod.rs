//! Headline sources.
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | NPR Text | [`npr`] | HTML scraping | `a.topic-title` anchors on the front page |
//!
//! A source exposes a `fetch_headlines()` that returns headline strings in
//! document order, and implements [`HeadlineSource`](crate::pipeline::HeadlineSource)
//! so the pipeline can swap it for a stub.

pub mod npr;
