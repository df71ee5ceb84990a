//! Advent of Code 2023
//!
//! Each `day_N` module holds one puzzle as a derived [`Solver`]. The
//! [`Solution`] enum below has one variant per day and forwards to it.

use aoc_solver::{
    RegistrationError, RegistryBuilder, RunResult, SolveResult, Solver, SolverError,
    SolverRegistry, run_solver, solve_with,
};

macro_rules! solutions {
    ($($day:literal => $module:ident :: $variant:ident),+ $(,)?) => {
        $(pub mod $module;)+

        /// Every solved day of 2023
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Solution {
            $($variant,)+
        }

        impl Solution {
            /// All variants in day order
            pub const ALL: &'static [Solution] = &[$(Solution::$variant,)+];
        }

        impl aoc_solver::Solution for Solution {
            fn day(&self) -> u8 {
                match self {
                    $(Solution::$variant => <$module::Solver as Solver>::DAY,)+
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Solution::$variant => <$module::Solver as Solver>::NAME,)+
                }
            }

            fn parts(&self) -> u8 {
                match self {
                    $(Solution::$variant => <$module::Solver as Solver>::PARTS,)+
                }
            }

            fn solve(&self, input: &str, part: u8) -> Result<SolveResult, SolverError> {
                match self {
                    $(Solution::$variant => solve_with::<$module::Solver>(input, part),)+
                }
            }

            fn run(&self, input: &str) -> Result<RunResult, SolverError> {
                match self {
                    $(Solution::$variant => run_solver::<$module::Solver>(input),)+
                }
            }
        }

        /// Build the registry of every 2023 day
        pub fn registry() -> Result<SolverRegistry<Solution>, RegistrationError> {
            let builder = RegistryBuilder::new();
            $(let builder = builder.register($day, || Solution::$variant)?;)+
            builder.build()
        }
    };
}

solutions! {
    1 => day_1::Trebuchet,
    2 => day_2::CubeConundrum,
    3 => day_3::GearRatios,
    4 => day_4::Scratchcards,
    5 => day_5::Fertilizer,
    6 => day_6::WaitForIt,
    7 => day_7::CamelCards,
    8 => day_8::HauntedWasteland,
    9 => day_9::MirageMaintenance,
    10 => day_10::PipeMaze,
    11 => day_11::CosmicExpansion,
    12 => day_12::HotSprings,
    13 => day_13::PointOfIncidence,
    14 => day_14::ParabolicReflectorDish,
    15 => day_15::LensLibrary,
    16 => day_16::FloorWillBeLava,
    17 => day_17::ClumsyCrucible,
    18 => day_18::LavaductLagoon,
    19 => day_19::Aplenty,
    20 => day_20::PulsePropagation,
    21 => day_21::StepCounter,
    22 => day_22::SandSlabs,
    23 => day_23::LongWalk,
    24 => day_24::NeverTellMeTheOdds,
    25 => day_25::Snowverload,
}
