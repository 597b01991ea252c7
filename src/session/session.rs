//! The session: all state one user drives, plus the actions they take.

use tracing::{debug, info, warn};

use super::identity::IdentityProvider;
use super::report::{CombatReport, SummonReport};
use super::snapshot::SessionSnapshot;
use crate::core::{parse_base, CalculatorConfig, SessionConfig, SessionError, StoreError};
use crate::entities::{Creature, CreatureRole, EntityStore};
use crate::log::{ActionLog, Trace};
use crate::modifiers::{ActiveModifierSet, ModifierId, ModifierKind, ModifierRegistry};
use crate::resolution::{CounterResolver, Resolution, ResolutionEvent};

/// One user's calculator state.
///
/// Owns the registry, the active modifier set, the creature store and the
/// log. Created after the identity check passes and dropped when the
/// session ends; nothing is global.
///
/// ## Example
///
/// ```
/// use ccg_counters::core::CalculatorConfig;
/// use ccg_counters::modifiers::ids;
/// use ccg_counters::session::{Session, StaticIdentity};
///
/// let mut session = Session::open(&StaticIdentity::authenticated(), CalculatorConfig::default()).unwrap();
/// session.toggle(ids::HARDENED_SCALES);
/// session.toggle(ids::BRANCHING_EVOLUTION);
/// session.set_base_text("2");
///
/// let report = session.summon().unwrap();
/// assert_eq!(report.primary.value, 6);
/// assert_eq!(session.creatures().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    registry: ModifierRegistry,
    active: ActiveModifierSet,
    config: SessionConfig,
    base: i64,
    store: EntityStore,
    log: ActionLog,
}

impl Session {
    /// Open a session once the identity provider says the user is signed in.
    pub fn open(
        identity: &impl IdentityProvider,
        config: CalculatorConfig,
    ) -> Result<Self, SessionError> {
        Self::authenticate(identity)?;
        config.validate()?;
        let registry = config.build_registry()?;
        Ok(Self::from_parts(registry, config.session))
    }

    /// Open a session with a registry built elsewhere.
    pub fn open_with_registry(
        identity: &impl IdentityProvider,
        registry: ModifierRegistry,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        Self::authenticate(identity)?;
        config.validate()?;
        Ok(Self::from_parts(registry, config))
    }

    /// Restore a session from a snapshot.
    pub fn restore(
        identity: &impl IdentityProvider,
        snapshot: SessionSnapshot,
    ) -> Result<Self, SessionError> {
        Self::authenticate(identity)?;
        snapshot.config.validate()?;
        let registry = ModifierRegistry::from_descriptors(snapshot.modifiers)?;
        Ok(Self {
            registry,
            active: snapshot.active,
            config: snapshot.config,
            base: snapshot.base,
            store: snapshot.store,
            log: snapshot.log,
        })
    }

    fn authenticate(identity: &impl IdentityProvider) -> Result<(), SessionError> {
        if identity.is_authenticated() {
            Ok(())
        } else {
            warn!("refusing to open session for unauthenticated user");
            Err(SessionError::Unauthenticated)
        }
    }

    fn from_parts(registry: ModifierRegistry, config: SessionConfig) -> Self {
        let log = match config.log_capacity {
            Some(capacity) => ActionLog::with_capacity(capacity),
            None => ActionLog::new(),
        };
        info!(modifiers = registry.len(), "session opened");
        Self {
            registry,
            active: ActiveModifierSet::new(),
            config,
            base: 0,
            store: EntityStore::new(),
            log,
        }
    }

    /// Capture the full session state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            modifiers: self.registry.descriptors().to_vec(),
            active: self.active.clone(),
            config: self.config.clone(),
            base: self.base,
            store: self.store.clone(),
            log: self.log.clone(),
        }
    }

    // === Accessors ===

    /// The modifier registry.
    #[must_use]
    pub fn registry(&self) -> &ModifierRegistry {
        &self.registry
    }

    /// Currently toggled modifiers.
    #[must_use]
    pub fn active(&self) -> &ActiveModifierSet {
        &self.active
    }

    /// Session tunables.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current base quantity X.
    #[must_use]
    pub fn base(&self) -> i64 {
        self.base
    }

    /// The creature store, for display.
    #[must_use]
    pub fn creatures(&self) -> &EntityStore {
        &self.store
    }

    /// The action log, for display.
    #[must_use]
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    // === Inputs ===

    /// Flip a modifier on or off. Returns whether it is now active.
    pub fn toggle(&mut self, id: impl Into<ModifierId>) -> bool {
        let id = id.into();
        if !self.registry.contains(&id) {
            debug!(%id, "toggled unregistered modifier");
        }
        self.active.toggle(id)
    }

    /// Check if a modifier is toggled on.
    #[must_use]
    pub fn is_active(&self, id: &ModifierId) -> bool {
        self.active.contains(id)
    }

    /// Set X from user text. Unparseable or negative text becomes 0.
    pub fn set_base_text(&mut self, text: &str) -> i64 {
        self.base = parse_base(text, self.config.max_base);
        self.base
    }

    /// Set X directly, clamped into `0..=max_base`.
    pub fn set_base(&mut self, base: i64) -> i64 {
        self.base = self.clamp_base(base);
        self.base
    }

    fn clamp_base(&self, base: i64) -> i64 {
        base.clamp(0, self.config.max_base)
    }

    /// What the primary would enter with right now, without summoning.
    #[must_use]
    pub fn preview_entry(&self) -> Resolution {
        CounterResolver::resolve_event(&self.registry, ResolutionEvent::Entry, self.base, &self.active)
    }

    // === Events ===

    /// Summon the primary creature with the current X.
    pub fn summon(&mut self) -> Option<SummonReport> {
        self.summon_with(self.base)
    }

    /// Summon the primary creature with X = `base`.
    ///
    /// The primary is a singleton: while one is in the store this is a
    /// silent no-op returning `None`.
    pub fn summon_with(&mut self, base: i64) -> Option<SummonReport> {
        if self.store.has_role(CreatureRole::Primary) {
            debug!("primary already present, ignoring summon");
            return None;
        }

        let base = self.clamp_base(base);
        let cap = self.config.max_tokens_per_event;
        let mut capped = false;

        let primary = CounterResolver::resolve_event(&self.registry, ResolutionEvent::Entry, base, &self.active);
        let token = CounterResolver::resolve_event(
            &self.registry,
            ResolutionEvent::Entry,
            self.config.token_entry_base,
            &self.active,
        );

        let token_count = bounded_count(base, cap, &mut capped);
        let per_counter = CounterResolver::tokens_per_counter(&self.registry, &self.active);
        let extra_token_count = bounded_count(primary.value.saturating_mul(per_counter), cap, &mut capped);
        if capped {
            warn!(cap, "token count capped");
        }

        let primary_index = self
            .store
            .push(self.config.primary.spawn(CreatureRole::Primary, primary.value));
        self.store.extend(
            (1..=token_count).map(|n| self.config.token.spawn_numbered(CreatureRole::Token, n, token.value)),
        );
        self.store.extend((1..=extra_token_count).map(|n| {
            self.config
                .extra_token
                .spawn_numbered(CreatureRole::ExtraToken, n, 0)
        }));

        let mut trace = Trace::new();
        trace.derived(
            format!("{} enters with {} counters.", self.config.primary.name, primary.value),
            &primary,
        );
        trace.derived(
            format!(
                "{token_count} {} tokens created. Each gets +{} counters.",
                self.config.token.name, token.value
            ),
            &token,
        );
        if per_counter > 0 {
            trace.line(format!(
                "{} created {extra_token_count} {}s.",
                self.active_names(ModifierKind::TokenMaker),
                self.config.extra_token.name
            ));
        }
        if capped {
            trace.line(format!("Token groups capped at {cap}."));
        }
        let entry = trace.finish();
        self.log.push(entry.clone());

        info!(
            base,
            primary = primary.value,
            tokens = token_count,
            token_counters = token.value,
            extra_tokens = extra_token_count,
            "primary entered"
        );

        Some(SummonReport {
            primary_index,
            primary,
            token_count,
            token,
            extra_token_count,
            capped,
            entry,
        })
    }

    /// Attack with the insects.
    ///
    /// Two independent channels: every insect gets the attack bonus, and
    /// when equipment is active every creature also gets the equipment
    /// bonus. A creature in both channels gets the sum.
    pub fn attack(&mut self) -> CombatReport {
        let attack = CounterResolver::resolve(&self.registry, self.config.combat_base, &self.active);
        let flat_base = CounterResolver::flat_base(&self.registry, &self.active);
        let equipment = (flat_base > 0)
            .then(|| CounterResolver::resolve(&self.registry, flat_base, &self.active));

        let insects_affected = self.store.apply_bonus(attack.value, |c| c.role.is_insect());
        let creatures_affected = equipment
            .as_ref()
            .map_or(0, |e| self.store.apply_bonus(e.value, |_| true));

        let mut trace = Trace::new();
        trace.line("Combat Phase:");
        match &equipment {
            Some(equipment) => trace.line(format!(
                "All insects get +{}, all creatures get +{} from {}.",
                attack.value,
                equipment.value,
                self.active_names(ModifierKind::FlatAdd)
            )),
            None => trace.line(format!(
                "All insects get +{}, all creatures get +0.",
                attack.value
            )),
        }
        if !attack.is_unmodified() {
            trace.derived("Insect bonus:", &attack);
        }
        if let Some(equipment) = equipment.as_ref().filter(|e| !e.is_unmodified()) {
            trace.derived("Equipment bonus:", equipment);
        }
        let entry = trace.finish();
        self.log.push(entry.clone());

        info!(
            insect_bonus = attack.value,
            equipment_bonus = equipment.as_ref().map_or(0, |e| e.value),
            insects_affected,
            creatures_affected,
            "combat resolved"
        );

        CombatReport {
            attack,
            equipment,
            insects_affected,
            creatures_affected,
            entry,
        }
    }

    fn active_names(&self, kind: ModifierKind) -> String {
        self.registry
            .of_kind(kind)
            .filter(|d| self.active.applies(d))
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    // === Manual edits ===

    /// Add a custom creature with no counters. Blank names are ignored.
    pub fn add_creature(&mut self, name: &str) -> Option<usize> {
        self.store.add(name, 0)
    }

    /// Add a custom creature with starting counters.
    pub fn add_creature_with(&mut self, name: &str, starting_counters: i64) -> Option<usize> {
        self.store.add(name, starting_counters)
    }

    /// Adjust one creature's counters, clamping at zero.
    pub fn increment(&mut self, index: usize, delta: i64) -> Result<i64, StoreError> {
        self.store.increment(index, delta)
    }

    /// Remove counters from one creature, clamping at zero.
    pub fn decrement(&mut self, index: usize, amount: i64) -> Result<i64, StoreError> {
        self.store.decrement(index, amount)
    }

    /// Remove one creature. Others keep their names.
    pub fn remove_creature(&mut self, index: usize) -> Result<Creature, StoreError> {
        self.store.remove(index)
    }

    /// Remove every creature.
    pub fn clear_creatures(&mut self) {
        self.store.clear();
        debug!("creatures cleared");
    }

    /// Remove every log entry.
    pub fn clear_log(&mut self) {
        self.log.clear();
        debug!("log cleared");
    }
}

/// Convert a resolved count to a number of creatures, bounded by `cap`.
fn bounded_count(count: i64, cap: usize, capped: &mut bool) -> usize {
    let count = usize::try_from(count.max(0)).unwrap_or(usize::MAX);
    if count > cap {
        *capped = true;
        cap
    } else {
        count
    }
}
