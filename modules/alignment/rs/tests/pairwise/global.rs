use nwalign_alignment_rs::pairwise::nw::{render, Engine, EngineBuilder, Strategy};
use nwalign_alignment_rs::pairwise::scoring::{gaps::Penalties, symbols, Scheme};
use nwalign_alignment_rs::pairwise::sequence::{EmptyPolicy, GAP};
use nwalign_alignment_rs::pairwise::{Alignment, Op};

pub type Score = i32;

fn configured(
    equal: Score,
    different: Score,
    interior: Score,
    edge: Score,
) -> Engine<symbols::CaseInsensitive<Score>> {
    EngineBuilder::new(symbols::CaseInsensitive::new(equal, different))
        .penalties(Penalties::new(interior, edge))
        .build()
}

fn schemes() -> Vec<Engine<symbols::CaseInsensitive<Score>>> {
    vec![
        configured(1, -1, -1, -1),
        configured(2, -1, -2, 0),
        configured(2, -1, -3, -1),
        configured(1, 0, 0, 0),
        configured(5, -4, -10, -1),
    ]
}

/// Deterministic pseudo-random DNA sequences.
fn sequences(count: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };
    (0..count)
        .map(|_| {
            let len = 1 + next() % 12;
            (0..len).map(|_| b"ACGT"[next() % 4]).collect()
        })
        .collect()
}

fn strip(line: &[u8]) -> Vec<u8> {
    line.iter().copied().filter(|x| *x != GAP).collect()
}

/// Score of the alignment path, recomputed column by column.
fn rescore<Sym: symbols::Scorer<Score = Score>>(
    alignment: &Alignment<Score>,
    seq1: &[u8],
    seq2: &[u8],
    scheme: &Scheme<Sym>,
) -> Score {
    let (last_row, last_col) = (seq1.len(), seq2.len());
    let (mut row, mut col) = (0usize, 0usize);
    let mut total = 0;
    for op in alignment.ops() {
        op.apply(&mut row, &mut col, 1usize);
        total += match op {
            Op::Match | Op::Mismatch => scheme.pair(&seq1[row - 1], &seq2[col - 1]),
            Op::GapSecond => scheme.gaps().up(col, last_col),
            Op::GapFirst => scheme.gaps().left(row, last_row),
        };
    }
    assert_eq!((row, col), (last_row, last_col));
    total
}

/// Exhaustive search over all alignment paths ending in the cell (row, col).
fn exhaustive<Sym: symbols::Scorer<Score = Score>>(
    seq1: &[u8],
    seq2: &[u8],
    scheme: &Scheme<Sym>,
    row: usize,
    col: usize,
) -> Score {
    if row == 0 && col == 0 {
        return 0;
    }
    let mut best = None;
    if row > 0 && col > 0 {
        let score = exhaustive(seq1, seq2, scheme, row - 1, col - 1)
            + scheme.pair(&seq1[row - 1], &seq2[col - 1]);
        best = Some(score);
    }
    if row > 0 {
        let score = exhaustive(seq1, seq2, scheme, row - 1, col)
            + scheme.gaps().up(col, seq2.len());
        best = Some(best.map_or(score, |x: Score| x.max(score)));
    }
    if col > 0 {
        let score = exhaustive(seq1, seq2, scheme, row, col - 1)
            + scheme.gaps().left(row, seq1.len());
        best = Some(best.map_or(score, |x: Score| x.max(score)));
    }
    best.unwrap_or(0)
}

fn lines(alignment: &Alignment<Score>) -> [String; 3] {
    alignment.lines()
}

#[test]
fn test_textbook_example() -> eyre::Result<()> {
    let engine = configured(1, -1, -1, -1);
    let alignment = engine.align("GATTACA", "GCATGCU")?;

    assert_eq!(*alignment.score(), 0);
    assert_eq!(
        lines(&alignment),
        ["G_ATTACA", "| | | | ", "GCA_TGCU"].map(String::from)
    );
    assert_eq!(alignment.rle(), "1=1v1=1^1=1X1=1X");
    assert_eq!(alignment.to_string(), "G_ATTACA\n| | | | \nGCA_TGCU");

    let flipped = engine.align("GCATGCU", "GATTACA")?;
    assert_eq!(*flipped.score(), 0);
    assert_eq!(
        lines(&flipped),
        ["GCA_TGCU", "| | | | ", "G_ATTACA"].map(String::from)
    );
    Ok(())
}

#[test]
fn test_free_end_gaps() -> eyre::Result<()> {
    let engine = configured(2, -1, -3, 0);
    let alignment = engine.align("TTGACCA", "GACC")?;
    assert_eq!(*alignment.score(), 8);
    assert_eq!(
        lines(&alignment),
        ["TTGACCA", "  |||| ", "__GACC_"].map(String::from)
    );

    let alignment = engine.align("GACC", "TTGACCA")?;
    assert_eq!(*alignment.score(), 8);
    assert_eq!(
        lines(&alignment),
        ["__GACC_", "  |||| ", "TTGACCA"].map(String::from)
    );

    // Cheap edge gaps push the sequences apart entirely
    let alignment = configured(2, -1, -2, 0).align("GATTACA", "GCATGCU")?;
    assert_eq!(*alignment.score(), 3);
    assert_eq!(
        lines(&alignment),
        ["GATTACA____", "     ||    ", "____GCATGCU"].map(String::from)
    );
    Ok(())
}

#[test]
fn test_interior_gap() -> eyre::Result<()> {
    let alignment = configured(1, -1, -2, -1).align("ACGTACGT", "ACGACGT")?;
    assert_eq!(*alignment.score(), 5);
    assert_eq!(
        lines(&alignment),
        ["ACGTACGT", "||| ||||", "ACG_ACGT"].map(String::from)
    );
    assert_eq!(alignment.rle(), "3=1^4=");
    Ok(())
}

#[test]
fn test_identical_sequences() -> eyre::Result<()> {
    let engine = configured(1, 0, 0, 0);
    let alignment = engine.align("ACGT", "ACGT")?;
    assert_eq!(*alignment.score(), 4);
    assert_eq!(lines(&alignment), ["ACGT", "||||", "ACGT"].map(String::from));
    assert_eq!(alignment.rle(), "4=");
    Ok(())
}

#[test]
fn test_empty_sequences() -> eyre::Result<()> {
    let collapse = configured(2, -1, -5, -2);
    let gaprun = EngineBuilder::new(symbols::CaseInsensitive::new(2, -1))
        .penalties(Penalties::new(-5, -2))
        .on_empty(EmptyPolicy::GapRun)
        .build();

    for engine in [&collapse, &gaprun] {
        let alignment = engine.align("", "")?;
        assert_eq!(*alignment.score(), 0);
        assert!(alignment.is_empty());
        assert_eq!(alignment.to_string(), "\n\n");
        assert_eq!(engine.score("", "")?, 0);
    }

    for (seq1, seq2) in [("", "ACGT"), ("ACGT", "")] {
        let alignment = collapse.align(seq1, seq2)?;
        assert_eq!(*alignment.score(), 0);
        assert!(alignment.is_empty());
        assert_eq!(collapse.score(seq1, seq2)?, 0);
    }

    let alignment = gaprun.align("", "ACGT")?;
    assert_eq!(*alignment.score(), -8);
    assert_eq!(lines(&alignment), ["____", "    ", "ACGT"].map(String::from));
    assert_eq!(alignment.rle(), "4v");
    assert_eq!(gaprun.score("", "ACGT")?, -8);

    let alignment = gaprun.align("ACGT", "")?;
    assert_eq!(*alignment.score(), -8);
    assert_eq!(lines(&alignment), ["ACGT", "    ", "____"].map(String::from));
    assert_eq!(alignment.rle(), "4^");
    Ok(())
}

#[test]
fn test_single_symbols() -> eyre::Result<()> {
    let engine = configured(1, -1, -3, -3);
    let alignment = engine.align("A", "A")?;
    assert_eq!(*alignment.score(), 1);
    assert_eq!(lines(&alignment), ["A", "|", "A"].map(String::from));

    let alignment = engine.align("A", "C")?;
    assert_eq!(*alignment.score(), -1);
    assert_eq!(lines(&alignment), ["A", " ", "C"].map(String::from));
    assert_eq!(alignment.rle(), "1X");
    Ok(())
}

#[test]
fn test_extreme_penalties() -> eyre::Result<()> {
    // Mismatches are so expensive that gapping everything out is preferable
    let engine = configured(1, Score::MIN / 4, -1, -1);
    let alignment = engine.align("AC", "GT")?;
    assert_eq!(*alignment.score(), -4);
    assert!(alignment.ops().all(|op| !op.is_diagonal()));

    // Every path is hugely negative: the scores must neither overflow nor lose to a floor value
    let engine = configured(1, Score::MIN / 4, Score::MIN / 8, Score::MIN / 8);
    let alignment = engine.align("A", "C")?;
    assert_eq!(*alignment.score(), Score::MIN / 4);
    assert_eq!(alignment.rle(), "1X");
    Ok(())
}

#[test]
fn test_case_insensitive_match_line() -> eyre::Result<()> {
    let engine = EngineBuilder::new(symbols::Equality::new(1, -1))
        .penalties(Penalties::uniform(-5))
        .build();
    let alignment = engine.align("acgt", "ACGT")?;
    assert_eq!(*alignment.score(), -4);
    assert_eq!(lines(&alignment), ["acgt", "||||", "ACGT"].map(String::from));

    let alignment = EngineBuilder::<symbols::CaseInsensitive<Score>>::default()
        .build()
        .align("acgt", "ACGT")?;
    assert_eq!(*alignment.score(), 4);
    Ok(())
}

#[test]
fn test_substitution_table() -> eyre::Result<()> {
    // Transitions (A<->G, C<->T) are penalized less than transversions
    let table = symbols::from_fn(|s1: &u8, s2: &u8| -> Score {
        match (s1.to_ascii_uppercase(), s2.to_ascii_uppercase()) {
            (a, b) if a == b => 3,
            (b'A', b'G') | (b'G', b'A') | (b'C', b'T') | (b'T', b'C') => -1,
            _ => -4,
        }
    });
    let engine = EngineBuilder::new(&table)
        .penalties(Penalties::new(-6, -6))
        .build();

    let alignment = engine.align("ACGT", "GCGC")?;
    assert_eq!(*alignment.score(), 4);
    assert_eq!(lines(&alignment), ["ACGT", " || ", "GCGC"].map(String::from));
    assert_eq!(alignment.rle(), "1X2=1X");
    Ok(())
}

#[test]
fn test_invariants() -> eyre::Result<()> {
    let workload = sequences(24, 42);
    for engine in schemes() {
        for seq1 in &workload {
            for seq2 in workload.iter().take(8) {
                let alignment = engine.align(seq1, seq2)?;

                // Equal line lengths and recoverable inputs
                assert_eq!(alignment.seq1().len(), alignment.len());
                assert_eq!(alignment.matches().len(), alignment.len());
                assert_eq!(alignment.seq2().len(), alignment.len());
                assert_eq!(&strip(alignment.seq1()), seq1);
                assert_eq!(&strip(alignment.seq2()), seq2);

                // Gap columns are blank in the match line, matches are marked
                for ((s1, m), s2) in alignment
                    .seq1()
                    .iter()
                    .zip(alignment.matches())
                    .zip(alignment.seq2())
                {
                    assert!(!(*s1 == GAP && *s2 == GAP));
                    let expected = if s1.eq_ignore_ascii_case(s2) && *s1 != GAP {
                        b'|'
                    } else {
                        b' '
                    };
                    assert_eq!(*m, expected);
                }

                // The path explains the score and the score is optimal
                let score = *alignment.score();
                assert_eq!(rescore(&alignment, seq1, seq2, engine.scheme()), score);
                assert_eq!(engine.score(seq1, seq2)?, score);
                if seq1.len() + seq2.len() <= 12 {
                    let best = exhaustive(seq1, seq2, engine.scheme(), seq1.len(), seq2.len());
                    assert_eq!(best, score);
                }

                // Idempotent
                assert_eq!(engine.align(seq1, seq2)?, alignment);
            }
        }
    }
    Ok(())
}

#[test]
fn test_symmetry() -> eyre::Result<()> {
    let workload = sequences(16, 7);
    for engine in schemes() {
        for seq1 in &workload {
            for seq2 in &workload {
                assert_eq!(engine.score(seq1, seq2)?, engine.score(seq2, seq1)?);
            }
        }
    }
    Ok(())
}

#[test]
fn test_strategies_agree() -> eyre::Result<()> {
    let workload = sequences(12, 2024);
    for bottomup in schemes() {
        let memoized = EngineBuilder::new(*bottomup.scheme().symbols())
            .penalties(*bottomup.scheme().gaps())
            .strategy(Strategy::Memoized)
            .build();
        for seq1 in &workload {
            for seq2 in &workload {
                assert_eq!(bottomup.matrix(seq1, seq2)?, memoized.matrix(seq1, seq2)?);
                assert_eq!(bottomup.align(seq1, seq2)?, memoized.align(seq1, seq2)?);
                assert_eq!(bottomup.score(seq1, seq2)?, memoized.score(seq1, seq2)?);
            }
        }
    }
    Ok(())
}

#[test]
fn test_matrix_dump() -> eyre::Result<()> {
    let engine = configured(1, -1, -1, -1);
    let matrix = engine.matrix("AG", "AAG")?;
    assert_eq!(matrix.score(), 1);

    let dump = render::matrix(&matrix, ".AG", ".AAG");
    assert_eq!(
        dump.as_deref(),
        Some(concat!(
            "    .  A  A  G \n",
            ".   0 -1 -2 -3\n",
            "A  -1  1  0 -1\n",
            "G  -2  0  0  1\n",
        ))
    );

    let long = "A".repeat(40);
    let matrix = engine.matrix(&long, "ACGT")?;
    assert!(render::matrix(&matrix, format!(".{}", long).as_str(), ".ACGT").is_none());
    Ok(())
}
