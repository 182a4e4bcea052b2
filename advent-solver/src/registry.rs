//! Solver registry and plugin-based registration

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::HashMap;

/// Factory function creating a solver instance from raw input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The puzzle year
    pub year: u16,
    /// The puzzle day
    pub day: u8,
    /// Number of parts the solver declares
    pub parts: u8,
}

struct RegistryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for a [`SolverRegistry`].
///
/// Registration detects duplicate `(year, day)` combinations; once built,
/// the registry is immutable and only serves lookups.
///
/// # Example
///
/// ```no_run
/// # use advent_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    solvers: HashMap<(u16, u8), RegistryEntry>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            solvers: HashMap::new(),
        }
    }

    /// Register a factory function for `year`/`day`.
    ///
    /// `parts` is surfaced through [`SolverInfo`]; the factory is invoked
    /// once per [`SolverRegistry::create_solver`] call.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.solvers.insert(
            (year, day),
            RegistryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register a [`Solver`] type for `year`/`day`.
    ///
    /// The generated factory parses the input into a [`SolverInstance`].
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance))
        })
    }

    /// Register every solver plugin submitted via [`submit_solver!`](crate::submit_solver).
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the solver plugins matching `filter`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.year == 2025)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from `(year, day)` to solver factories
pub struct SolverRegistry {
    solvers: HashMap<(u16, u8), RegistryEntry>,
}

impl SolverRegistry {
    /// Create a solver instance for `year`/`day` by parsing `input`.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::Parse)
    }

    /// Metadata for the solver registered at `year`/`day`, if any
    pub fn get_info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.solvers.get(&(year, day)).map(|entry| SolverInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Iterate over metadata for every registered solver
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.solvers
            .iter()
            .map(|(&(year, day), entry)| SolverInfo {
                year,
                day,
                parts: entry.parts,
            })
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Whether the registry holds no solvers
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Type-erased registration, implemented for every [`Solver`].
///
/// [`SolverPlugin`] stores solvers behind this trait so plugins of different
/// concrete types can live in one `inventory` collection.
pub trait RegisterableSolver: Sync {
    /// Register this solver with the builder for `year`/`day`
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts the solver declares
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration.
///
/// Collected through `inventory`; [`RegistryBuilder::register_all_plugins`]
/// and [`RegistryBuilder::register_plugins`] walk the collection. Use
/// [`submit_solver!`](crate::submit_solver) rather than submitting by hand.
pub struct SolverPlugin {
    /// The puzzle year
    pub year: u16,
    /// The puzzle day
    pub day: u8,
    /// The solver (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering during registration
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Submits a solver type to the plugin collection.
///
/// # Example
///
/// ```ignore
/// submit_solver!(Solver, year = 2025, day = 1, tags = ["2025"]);
/// ```
#[macro_export]
macro_rules! submit_solver {
    ($solver:path, year = $year:literal, day = $day:literal, tags = [$($tag:literal),* $(,)?]) => {
        $crate::inventory::submit! {
            $crate::SolverPlugin {
                year: $year,
                day: $day,
                solver: &$solver,
                tags: &[$($tag),*],
            }
        }
    };
}
