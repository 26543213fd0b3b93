//! Floating captions describing whatever the light is clinging to.
//!
//! Captions are emitted only when the hovered region changes identity and at
//! most once per cooldown window. A single welcome caption is scheduled
//! independently, a short delay after mount.

use crate::constants::*;
use crate::geometry::Rect;
use crate::region::{ElementTraits, RegionId};
use glam::Vec2;
use std::time::Duration;

/// Unique token per caption, increasing in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: &'static str,
    /// Surface-space anchor captured at creation.
    pub anchor: Vec2,
    pub opacity: f32,
    pub life: u32,
}

impl ChatMessage {
    fn new(id: MessageId, text: &'static str, anchor: Vec2, life: u32) -> Self {
        Self {
            id,
            text,
            anchor,
            opacity: MESSAGE_OPACITY,
            life,
        }
    }

    /// One tick of ageing. Returns false once the caption has expired.
    ///
    /// The fade is normalised to a contextual caption's life, so longer-lived
    /// captions hold full opacity until their remaining life drops below it.
    fn age(&mut self) -> bool {
        self.life = self.life.saturating_sub(1);
        self.opacity = (self.life as f32 / COMMENT_LIFE as f32 * MESSAGE_OPACITY).min(MESSAGE_OPACITY);
        self.life > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Matcher {
    Tag(&'static [&'static str]),
    Class(&'static [&'static str]),
    TagOrClass(&'static [&'static str], &'static [&'static str]),
    Text(&'static [&'static str]),
}

/// A priority-ordered caption rule.
#[derive(Clone, Copy, Debug)]
pub struct CommentRule {
    matcher: Matcher,
    pub message: &'static str,
}

pub const FALLBACK_MESSAGE: &str = "Hmm, what do we have here?";

pub const COMMENT_RULES: &[CommentRule] = &[
    CommentRule {
        matcher: Matcher::TagOrClass(&["button"], &["button"]),
        message: "Ah, a button! Shall we give it a press, sir?",
    },
    CommentRule {
        matcher: Matcher::TagOrClass(&["a"], &["link"]),
        message: "A link! I wonder where this leads us...",
    },
    CommentRule {
        matcher: Matcher::Tag(&["input", "textarea"]),
        message: "An input field! What shall we write here?",
    },
    CommentRule {
        matcher: Matcher::Tag(&["form"]),
        message: "A form! Time to fill in some details, perhaps?",
    },
    CommentRule {
        matcher: Matcher::Class(&["card", "item", "product"]),
        message: "Interesting card! Let me take a closer look...",
    },
    CommentRule {
        matcher: Matcher::TagOrClass(&["h1", "h2"], &["header"]),
        message: "Ah, a heading! This seems important.",
    },
    CommentRule {
        matcher: Matcher::Class(&["footer"]),
        message: "The footer! We've reached the bottom, but not the end!",
    },
    CommentRule {
        matcher: Matcher::Text(&["sign up", "register"]),
        message: "Oooo, a sign up card... Oh can we please!?",
    },
    CommentRule {
        matcher: Matcher::Text(&["stat", "statistics"]),
        message: "Stats card? Nice! I love stats!",
    },
    CommentRule {
        matcher: Matcher::Text(&["contact"]),
        message: "Contact information! Shall we reach out?",
    },
    CommentRule {
        matcher: Matcher::Text(&["about"]),
        message: "About section! Let's learn more, shall we?",
    },
];

/// Normalised view of an element the rules match against.
struct RuleInput {
    tag: String,
    class_name: String,
    text: String,
}

impl RuleInput {
    fn from_traits(traits: &ElementTraits) -> Self {
        Self {
            tag: traits.tag.to_ascii_lowercase(),
            class_name: traits.class_name.clone(),
            text: traits
                .text
                .trim()
                .chars()
                .take(COMMENT_TEXT_PREFIX)
                .collect::<String>()
                .to_lowercase(),
        }
    }
}

impl CommentRule {
    fn matches(&self, input: &RuleInput) -> bool {
        let tag_is = |tags: &[&str]| tags.iter().any(|t| input.tag == *t);
        let class_has = |parts: &[&str]| parts.iter().any(|p| input.class_name.contains(p));
        let text_has = |parts: &[&str]| parts.iter().any(|p| input.text.contains(p));
        match self.matcher {
            Matcher::Tag(tags) => tag_is(tags),
            Matcher::Class(parts) => class_has(parts),
            Matcher::TagOrClass(tags, parts) => tag_is(tags) || class_has(parts),
            Matcher::Text(parts) => text_has(parts),
        }
    }
}

/// Caption text for an element: the first matching rule, else the fallback.
pub fn message_for(traits: &ElementTraits) -> &'static str {
    let input = RuleInput::from_traits(traits);
    COMMENT_RULES
        .iter()
        .find(|rule| rule.matches(&input))
        .map(|rule| rule.message)
        .unwrap_or(FALLBACK_MESSAGE)
}

/// Emits and ages captions.
#[derive(Debug, Default)]
pub struct Commentary {
    messages: Vec<ChatMessage>,
    next_id: u64,
    last_spoken: Option<Duration>,
    current: Option<RegionId>,
    welcomed: bool,
}

impl Commentary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Region identity seen on the previous tick.
    pub fn current(&self) -> Option<RegionId> {
        self.current
    }

    /// Show the welcome caption once `now` (time since mount) passes the
    /// welcome delay. `viewport` is the surface size at that moment.
    pub fn maybe_welcome(&mut self, now: Duration, viewport: Vec2) -> Option<MessageId> {
        if self.welcomed || now < Duration::from_millis(WELCOME_DELAY_MS) {
            return None;
        }
        self.welcomed = true;
        let anchor = Vec2::new(viewport.x * 0.5, viewport.y * 0.5 - WELCOME_OFFSET_Y);
        Some(self.push(WELCOME_TEXT, anchor, WELCOME_LIFE))
    }

    /// Observe this tick's hovered region. Emits a caption when the identity
    /// changed and the cooldown has elapsed; the identity is remembered either
    /// way so a suppressed change is not replayed later.
    pub fn observe(
        &mut self,
        hovered: Option<(RegionId, Rect, &ElementTraits)>,
        now: Duration,
    ) -> Option<MessageId> {
        let Some((id, rect, traits)) = hovered else {
            self.current = None;
            return None;
        };
        if self.current == Some(id) {
            return None;
        }
        self.current = Some(id);

        let cooldown = Duration::from_millis(COMMENT_COOLDOWN_MS);
        if let Some(last) = self.last_spoken {
            if now.saturating_sub(last) < cooldown {
                log::debug!("[caption] suppressed for {:?} (cooldown)", id);
                return None;
            }
        }
        let text = message_for(traits);
        let anchor = Vec2::new(rect.center().x, rect.top() - COMMENT_OFFSET_Y);
        self.last_spoken = Some(now);
        log::debug!("[caption] {:?}: {}", id, text);
        Some(self.push(text, anchor, COMMENT_LIFE))
    }

    /// Age every caption by one tick and drop the expired ones.
    pub fn tick(&mut self) {
        self.messages.retain_mut(ChatMessage::age);
    }

    /// Forget every caption and pending state; used on teardown.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.current = None;
    }

    fn push(&mut self, text: &'static str, anchor: Vec2, life: u32) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, text, anchor, life));
        id
    }
}
