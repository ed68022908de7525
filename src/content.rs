//! Motivational quotes and break ideas shown while a countdown runs.

use crate::domain::Mode;
use rand::Rng;
use std::time::{Duration, Instant};

const QUOTES: &[&str] = &[
    "The secret of getting ahead is getting started. - Mark Twain",
    "Focus on being productive instead of busy. - Tim Ferriss",
    "Productivity is never an accident. It is always the result of a commitment to excellence. - Paul J. Meyer",
    "You don't have to be great to get started, but you have to get started to be great. - Les Brown",
    "The way to get started is to quit talking and begin doing. - Walt Disney",
    "Success is the sum of small efforts repeated day in and day out. - Robert Collier",
    "Don't watch the clock; do what it does. Keep going. - Sam Levenson",
    "The future depends on what you do today. - Mahatma Gandhi",
    "Excellence is not a skill, it's an attitude. - Ralph Marston",
    "Progress, not perfection. - Unknown",
    "Great things never come from comfort zones. - Unknown",
    "Your limitation, it's only your imagination. - Unknown",
    "Push yourself, because no one else is going to do it for you. - Unknown",
    "Sometimes later becomes never. Do it now. - Unknown",
    "Dream it. Wish it. Do it. - Unknown",
];

const SHORT_BREAK_IDEAS: &[&str] = &[
    "🧘 Take 5 deep breaths and stretch your arms",
    "💧 Drink a glass of water to stay hydrated",
    "👀 Look away from your screen and focus on something distant",
    "🚶 Take a quick walk around your room or office",
    "🤸 Do some light stretching exercises",
    "🌱 Water your plants or look at something green",
    "🎵 Listen to your favorite song",
    "📱 Text a friend or family member",
    "☕ Make yourself a healthy snack",
    "🧊 Splash cold water on your face to refresh",
    "🪟 Open a window and get some fresh air",
    "🎯 Do some quick neck and shoulder rolls",
    "📚 Read a few pages of a book",
    "🧹 Organize your desk space",
    "☕ Make a cup of tea or coffee",
];

const LONG_BREAK_IDEAS: &[&str] = &[
    "🚶 Take a 10-15 minute walk outside",
    "🍎 Prepare and eat a healthy meal or snack",
    "📖 Read a few pages of a book",
    "🧘 Do a 10-minute meditation session",
    "📞 Call a friend or family member",
    "🧹 Tidy up your workspace or room",
    "🎨 Do a creative activity like drawing or writing",
    "🛁 Take a refreshing shower",
    "🎵 Listen to a podcast or your favorite playlist",
    "💪 Do some light exercise or yoga",
    "🌅 Step outside and get some fresh air",
    "📝 Journal about your progress or thoughts",
    "🍃 Practice gratitude - list 3 things you're thankful for",
    "🧘 Do some deep breathing exercises",
    "🎮 Play a quick game or puzzle",
    "🌱 Do some gardening or plant care",
    "🎭 Watch a funny video to boost your mood",
];

/// Which pool the ambient pane draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Quote,
    ShortBreakIdea,
    LongBreakIdea,
}

impl ContentKind {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Focus => ContentKind::Quote,
            Mode::ShortBreak => ContentKind::ShortBreakIdea,
            Mode::LongBreak => ContentKind::LongBreakIdea,
        }
    }

    pub fn pool(&self) -> &'static [&'static str] {
        match self {
            ContentKind::Quote => QUOTES,
            ContentKind::ShortBreakIdea => SHORT_BREAK_IDEAS,
            ContentKind::LongBreakIdea => LONG_BREAK_IDEAS,
        }
    }

    /// How long one entry stays on screen
    pub fn period(&self) -> Duration {
        match self {
            ContentKind::Quote => Duration::from_secs(3 * 60),
            ContentKind::ShortBreakIdea | ContentKind::LongBreakIdea => Duration::from_secs(60),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            ContentKind::Quote => "Stay Focused",
            ContentKind::ShortBreakIdea => "Quick Break Ideas",
            ContentKind::LongBreakIdea => "Long Break Activities",
        }
    }

    pub fn footer(&self) -> &'static str {
        match self {
            ContentKind::Quote => "New quote every 3 minutes",
            ContentKind::ShortBreakIdea | ContentKind::LongBreakIdea => "New tip every minute",
        }
    }
}

/// Picks a random entry from the visible pool and swaps it on a fixed period
#[derive(Debug, Clone)]
pub struct ContentRotator {
    kind: Option<ContentKind>,
    index: usize,
    last_rotation: Instant,
}

impl ContentRotator {
    pub fn new(now: Instant) -> Self {
        Self {
            kind: None,
            index: 0,
            last_rotation: now,
        }
    }

    /// Bring the rotator in line with what should be visible. A new kind
    /// gets a fresh pick at once; the same kind rotates when its period is up.
    pub fn sync<R: Rng + ?Sized>(&mut self, visible: Option<ContentKind>, now: Instant, rng: &mut R) {
        if visible != self.kind {
            self.kind = visible;
            self.last_rotation = now;
            if let Some(kind) = visible {
                self.index = rng.random_range(0..kind.pool().len());
            }
            return;
        }

        if let Some(kind) = self.kind {
            if now.duration_since(self.last_rotation) >= kind.period() {
                self.index = rng.random_range(0..kind.pool().len());
                self.last_rotation = now;
            }
        }
    }

    pub fn kind(&self) -> Option<ContentKind> {
        self.kind
    }

    pub fn current(&self) -> Option<&'static str> {
        self.kind.and_then(|kind| kind.pool().get(self.index).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(ContentKind::Quote.pool().len(), 15);
        assert_eq!(ContentKind::ShortBreakIdea.pool().len(), 15);
        assert_eq!(ContentKind::LongBreakIdea.pool().len(), 17);
    }

    #[test]
    fn test_kind_for_mode() {
        assert_eq!(ContentKind::for_mode(Mode::Focus), ContentKind::Quote);
        assert_eq!(ContentKind::for_mode(Mode::LongBreak), ContentKind::LongBreakIdea);
        assert_eq!(ContentKind::for_mode(Mode::LongBreak).heading(), "Long Break Activities");
    }

    #[test]
    fn test_hidden_until_visible() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut rotator = ContentRotator::new(now);
        assert_eq!(rotator.current(), None);

        rotator.sync(Some(ContentKind::Quote), now, &mut rng);
        let quote = rotator.current().unwrap();
        assert!(QUOTES.contains(&quote));

        rotator.sync(None, now, &mut rng);
        assert_eq!(rotator.current(), None);
    }

    #[test]
    fn test_switches_pool_immediately() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(1);
        let mut rotator = ContentRotator::new(now);

        rotator.sync(Some(ContentKind::Quote), now, &mut rng);
        rotator.sync(Some(ContentKind::ShortBreakIdea), now + Duration::from_secs(1), &mut rng);
        assert_eq!(rotator.kind(), Some(ContentKind::ShortBreakIdea));
        assert!(SHORT_BREAK_IDEAS.contains(&rotator.current().unwrap()));
    }

    #[test]
    fn test_rotation_waits_for_period() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(3);
        let mut rotator = ContentRotator::new(now);
        rotator.sync(Some(ContentKind::ShortBreakIdea), now, &mut rng);
        let first = rotator.last_rotation;

        rotator.sync(Some(ContentKind::ShortBreakIdea), now + Duration::from_secs(59), &mut rng);
        assert_eq!(rotator.last_rotation, first);

        rotator.sync(Some(ContentKind::ShortBreakIdea), now + Duration::from_secs(60), &mut rng);
        assert_eq!(rotator.last_rotation, now + Duration::from_secs(60));
        assert!(rotator.current().is_some());
    }
}
