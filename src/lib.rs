//! Rumeli SimplifAI marketing site: a client-rendered Yew app with
//! lazily loaded Turkish and English copy.

pub mod animation;
pub mod components;
pub mod config;
pub mod i18n;
pub mod pages;
pub mod routes;
