//! The command-line front end: reads a structure file and a words file, fills the crossword and
//! prints (and optionally exports) the result.
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap::ValueEnum;
use log::info;

use crate::branching::InDomainOrder;
use crate::branching::IndependentVariableValueBrancher;
use crate::branching::InputOrder;
use crate::branching::LeastConstrainingValue;
use crate::branching::MinimumRemainingValues;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;
use crate::model::Puzzle;
use crate::model::Vocabulary;
use crate::options::SolverOptions;
use crate::render::write_svg;
use crate::render::LetterGrid;
use crate::results::SatisfactionResult;
use crate::statistics::configure;
use crate::termination::DecisionBudget;
use crate::termination::Indefinite;
use crate::termination::TerminationCondition;
use crate::Solver;

#[derive(Debug, Parser)]
#[command(version, about = "Fill a crossword structure with words from a vocabulary")]
pub struct Cli {
    /// The structure file: one line per row, `_` for an open cell and `#` for a blocked cell.
    pub structure: PathBuf,

    /// The words file, one word per line.
    pub words: PathBuf,

    /// If provided, the filled crossword is written to this file as an SVG image.
    pub output: Option<PathBuf>,

    /// How the next slot to fill is chosen.
    #[arg(long, value_enum, default_value_t)]
    pub variable_selection: VariableSelection,

    /// In which order the candidate words of a slot are tried.
    #[arg(long, value_enum, default_value_t)]
    pub value_selection: ValueSelection,

    /// The number of decisions after which the search gives up.
    ///
    /// If no budget is provided, the search runs until it reaches a conclusion.
    #[arg(long)]
    pub decision_budget: Option<u64>,

    /// Skip arc consistency and search over the length-filtered domains only.
    #[arg(long)]
    pub no_arc_consistency: bool,

    /// Print solver statistics after solving.
    #[arg(long)]
    pub statistics: bool,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum VariableSelection {
    /// Fewest remaining candidates first, ties broken by the number of crossings.
    #[default]
    Mrv,
    /// Row-major slot order.
    InputOrder,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ValueSelection {
    /// Words ruling out the fewest candidates of crossing slots first.
    #[default]
    Lcv,
    /// Vocabulary order.
    InDomainOrder,
}

pub fn run() -> anyhow::Result<()> {
    let args = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    configure(args.statistics, "%% ", None);

    let puzzle = read_puzzle(&args.structure)?;
    let vocabulary = read_vocabulary(&args.words)?;
    info!(
        "Read {} slots and {} words",
        puzzle.num_variables(),
        vocabulary.len()
    );

    let options = SolverOptions {
        arc_consistency: !args.no_arc_consistency,
    };
    let mut solver = Solver::with_options(puzzle, vocabulary, options);

    let variable_selector: Box<dyn VariableSelector> = match args.variable_selection {
        VariableSelection::Mrv => Box::new(MinimumRemainingValues),
        VariableSelection::InputOrder => {
            Box::new(InputOrder::new(solver.puzzle().variables().collect()))
        }
    };
    let value_selector: Box<dyn ValueSelector> = match args.value_selection {
        ValueSelection::Lcv => Box::new(LeastConstrainingValue),
        ValueSelection::InDomainOrder => Box::new(InDomainOrder),
    };
    let mut brancher = IndependentVariableValueBrancher::new(variable_selector, value_selector);

    let mut termination: Box<dyn TerminationCondition> = match args.decision_budget {
        Some(budget) => Box::new(DecisionBudget::new(budget)),
        None => Box::new(Indefinite),
    };

    let result = solver.solve_with(&mut brancher, &mut termination);
    if args.statistics {
        solver.log_statistics();
    }

    match result {
        SatisfactionResult::Satisfiable(solution) => {
            let grid = LetterGrid::new(solver.puzzle(), &solution);
            print!("{grid}");

            if let Some(output) = args.output {
                let file = File::create(&output)
                    .with_context(|| format!("Failed to create {}", output.display()))?;
                let mut writer = BufWriter::new(file);
                write_svg(&grid, &mut writer)
                    .and_then(|_| writer.flush())
                    .with_context(|| format!("Failed to write image to {}", output.display()))?;
            }
        }
        SatisfactionResult::Unsatisfiable => println!("No solution."),
        SatisfactionResult::Unknown => println!("Unknown."),
    }

    Ok(())
}

fn read_puzzle(path: &Path) -> anyhow::Result<Puzzle> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading {}", path.display()))?;
    let structure = crossfill_format::parse_structure(&source)
        .with_context(|| format!("Failed to parse the structure in {}", path.display()))?;

    let (height, width) = (structure.height(), structure.width());
    Puzzle::new(height, width, structure.into_rows())
        .with_context(|| format!("Invalid structure in {}", path.display()))
}

fn read_vocabulary(path: &Path) -> anyhow::Result<Vocabulary> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading {}", path.display()))?;
    let words = crossfill_format::parse_vocabulary(&source)
        .with_context(|| format!("Failed to parse the words in {}", path.display()))?;

    Ok(Vocabulary::new(words))
}
