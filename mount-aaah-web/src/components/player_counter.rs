//! The live "players online" counter.
//!
//! The counter resolves the configured place to its universe once and then polls the player
//! count of that universe on a fixed interval until it is dropped.
use std::cell::Cell;
use std::rc::Rc;

use futures::future::{abortable, AbortHandle};
use futures::{pin_mut, Stream, StreamExt};
use gloo_timers::future::IntervalStream;
use mount_aaah_api::id::{PlaceId, UniverseId};
use mount_aaah_api::Client;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::consts::{
    LABEL_ONLINE, LABEL_UNAVAILABLE, PLAYERS_ID, PLAYERS_LABEL_ID, PLAYERS_ONLINE_CLASS,
    POLL_INTERVAL_MS, TEXT_LOADING, TEXT_UNAVAILABLE,
};
use crate::utils::{element_by_id, format_count, set_class};
use crate::{Error, SiteConfig};

/// Where the counter reads its numbers from.
#[allow(async_fn_in_trait)]
pub trait PlayerSource {
    /// Resolves the universe the place belongs to.
    async fn universe(&self, place: PlaceId) -> Result<UniverseId, Error>;

    /// Returns the number of players currently in the universe.
    async fn playing(&self, universe: UniverseId) -> Result<u64, Error>;
}

impl PlayerSource for Client {
    async fn universe(&self, place: PlaceId) -> Result<UniverseId, Error> {
        Ok(self.universes().get_by_place(place).await?)
    }

    async fn playing(&self, universe: UniverseId) -> Result<u64, Error> {
        Ok(self.games().playing(universe).await?)
    }
}

/// Where the counter writes its readings to.
pub trait CounterDisplay {
    fn show(&self, reading: &Reading);
}

/// What the counter currently displays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reading {
    Loading,
    Count(u64),
    Unavailable,
}

impl Reading {
    pub fn text(&self) -> String {
        match self {
            Self::Loading => TEXT_LOADING.to_owned(),
            Self::Count(count) => format_count(*count),
            Self::Unavailable => TEXT_UNAVAILABLE.to_owned(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading | Self::Count(_) => LABEL_ONLINE,
            Self::Unavailable => LABEL_UNAVAILABLE,
        }
    }

    /// Returns whether the online marker should be set. `None` leaves it untouched.
    pub fn online(&self) -> Option<bool> {
        match self {
            Self::Loading => None,
            Self::Count(count) => Some(*count > 0),
            Self::Unavailable => Some(false),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CounterState {
    Idle,
    ResolvingUniverse,
    Polling,
    /// The universe could not be resolved. This state is final.
    Unavailable,
}

#[derive(Debug)]
pub struct PlayerCounter<S, D> {
    source: S,
    display: D,
    state: Rc<Cell<CounterState>>,
    universe: Option<UniverseId>,
    last_count: Option<u64>,
}

impl<S, D> PlayerCounter<S, D>
where
    S: PlayerSource,
    D: CounterDisplay,
{
    pub fn new(source: S, display: D) -> Self {
        Self {
            source,
            display,
            state: Rc::new(Cell::new(CounterState::Idle)),
            universe: None,
            last_count: None,
        }
    }

    #[inline]
    pub fn state(&self) -> CounterState {
        self.state.get()
    }

    /// Returns a shared view of the state that stays readable after the counter was moved
    /// into its task.
    pub fn watch_state(&self) -> Rc<Cell<CounterState>> {
        self.state.clone()
    }

    #[inline]
    pub fn universe(&self) -> Option<UniverseId> {
        self.universe
    }

    /// Returns the count of the last poll, or `None` if it failed or nothing was polled yet.
    #[inline]
    pub fn last_count(&self) -> Option<u64> {
        self.last_count
    }

    /// Resolves `place` to its universe. Once resolved the universe is cached.
    pub async fn resolve(&mut self, place: PlaceId) -> Result<UniverseId, Error> {
        if let Some(universe) = self.universe {
            return Ok(universe);
        }

        self.state.set(CounterState::ResolvingUniverse);
        self.display.show(&Reading::Loading);

        match self.source.universe(place).await {
            Ok(universe) => {
                log::debug!("Place {} belongs to universe {}", place, universe);

                self.universe = Some(universe);
                self.state.set(CounterState::Polling);
                Ok(universe)
            }
            Err(err) => {
                log::warn!("Failed to resolve universe of place {}: {}", place, err);

                self.state.set(CounterState::Unavailable);
                self.display.show(&Reading::Unavailable);
                Err(err)
            }
        }
    }

    /// Polls the player count once and updates the display. Failures only degrade the display
    /// until the next successful poll.
    ///
    /// Returns `None` without polling if no universe is resolved yet.
    pub async fn poll(&mut self) -> Option<u64> {
        let universe = self.universe?;

        match self.source.playing(universe).await {
            Ok(count) => {
                self.last_count = Some(count);
                self.display.show(&Reading::Count(count));
                Some(count)
            }
            Err(err) => {
                log::warn!("Failed to poll players of universe {}: {}", universe, err);

                self.last_count = None;
                self.display.show(&Reading::Unavailable);
                None
            }
        }
    }

    /// Resolves `place`, polls immediately and then once per item yielded by `ticks`.
    ///
    /// Each poll completes before the next tick is awaited, so polls never overlap.
    pub async fn run<T>(mut self, place: PlaceId, ticks: T)
    where
        T: Stream<Item = ()>,
    {
        if self.resolve(place).await.is_err() {
            return;
        }

        pin_mut!(ticks);

        self.poll().await;
        while ticks.next().await.is_some() {
            self.poll().await;
        }
    }
}

/// The counter elements in the page.
#[derive(Clone, Debug)]
pub struct DomDisplay {
    number: Element,
    label: Element,
}

impl DomDisplay {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            number: element_by_id(PLAYERS_ID)?,
            label: element_by_id(PLAYERS_LABEL_ID)?,
        })
    }
}

impl CounterDisplay for DomDisplay {
    fn show(&self, reading: &Reading) {
        self.number.set_text_content(Some(&reading.text()));
        self.label.set_text_content(Some(reading.label()));

        if let Some(online) = reading.online() {
            set_class(&self.number, PLAYERS_ONLINE_CLASS, online);
        }
    }
}

/// Handle to the running counter. The polling task is aborted when the handle is dropped.
#[derive(Debug)]
pub struct CounterHandle {
    abort: AbortHandle,
    state: Rc<Cell<CounterState>>,
}

impl CounterHandle {
    /// Starts the counter for the configured place.
    ///
    /// # Errors
    ///
    /// Returns an error without starting anything if no place is configured or the counter
    /// elements are missing.
    pub fn start(config: &SiteConfig) -> Result<Self, Error> {
        let place = config
            .place_id()
            .ok_or(Error::NotConfigured("robloxPlaceId"))?;
        let display = DomDisplay::new()?;

        let counter = PlayerCounter::new(Client::new(), display);
        let state = counter.watch_state();
        let ticks = IntervalStream::new(POLL_INTERVAL_MS);

        let (task, abort) = abortable(counter.run(place, ticks));
        spawn_local(async move {
            if task.await.is_err() {
                log::debug!("Player counter stopped");
            }
        });

        Ok(Self { abort, state })
    }

    /// Returns the current state of the counter task.
    #[inline]
    pub fn state(&self) -> CounterState {
        self.state.get()
    }
}

impl Drop for CounterHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
