//! Optimal paragraph breaking.
//!
//! The breaker searches the graph of feasible breakpoints for the partition
//! of a horizontal list into lines with the least total demerits. Each
//! feasible breakpoint records the line it ends, the badness-derived fitness
//! of that line and a back-pointer to the breakpoint it extends; the best
//! terminal's back-pointer chain is the chosen partition.

use crate::diag::{TypesetError, TypesetResult};
use crate::geom::{Abs, Flex, GlueOrder, Numeric};
use crate::layout::pack::hbox_to;
use crate::layout::vlist::VListBuilder;
use crate::node::{BoxNode, Glue, Kern, List, Node, Penalty};

/// Per-line indent and length overrides. The last entry repeats for all
/// lines beyond it.
pub type Parshape = Vec<ParshapeSpec>;

/// The shape of a single line: an indent and the length of the line proper.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParshapeSpec {
    /// The indent before the line.
    pub indent: Abs,
    /// The length of the line.
    pub length: Abs,
}

/// How stretched or squeezed a line is.
///
/// Adjacent lines whose classes differ by more than one step look uneven,
/// which the optimizer charges for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Fitness {
    /// The glue ratio is below -1/2.
    Tight,
    /// The glue ratio is between -1/2 and 1/2.
    Decent,
    /// The glue ratio is between 1/2 and 1.
    Loose,
    /// The glue ratio is above 1.
    VeryLoose,
}

impl Fitness {
    /// Classify a glue ratio.
    fn of(ratio: f64) -> Self {
        if ratio < -0.5 {
            Self::Tight
        } else if ratio <= 0.5 {
            Self::Decent
        } else if ratio <= 1.0 {
            Self::Loose
        } else {
            Self::VeryLoose
        }
    }

    /// Whether two classes are close enough to sit on adjacent lines for
    /// free.
    fn compatible(self, other: Self) -> bool {
        (self as i32 - other as i32).abs() <= 1
    }

    fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Tight,
            1 => Self::Decent,
            2 => Self::Loose,
            _ => Self::VeryLoose,
        }
    }
}

/// Running sums along a horizontal list.
///
/// Per-line widths fall out as differences of two totals, keeping each break
/// attempt constant-time.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Totals {
    /// The accumulated width.
    pub width: Abs,
    /// The accumulated stretchability.
    pub stretch: Flex,
    /// The accumulated shrinkability.
    pub shrink: Flex,
}

/// A chosen line break.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    /// The index of the node the line ends at (exclusive).
    pub position: usize,
    /// The total demerits of the partition up to this break.
    pub demerits: i64,
    /// The number of lines up to and including this break.
    pub line: usize,
    /// The fitness class of the line ending here.
    pub fitness: Fitness,
    /// The totals just past this break, with trailing discardables consumed.
    pub totals: Totals,
}

/// A breakpoint in the arena during the search.
#[derive(Debug, Clone)]
struct ActiveNode {
    position: usize,
    demerits: i64,
    line: usize,
    fitness: Fitness,
    totals: Totals,
    previous: Option<usize>,
}

/// The configuration under which a paragraph is broken into lines.
#[derive(Debug, Clone)]
pub struct Paragraph {
    /// The measure: the length of a line without any shape overrides.
    pub hsize: Abs,
    /// The largest acceptable glue ratio.
    pub tolerance: f64,
    /// The demerits charged for each line, to favor fewer lines.
    pub line_penalty: i32,
    /// The demerits charged when adjacent lines' fitness classes clash.
    pub adj_demerits: i64,
    /// Glue inserted at the left edge of every line.
    pub leftskip: Glue,
    /// Glue inserted at the right edge of every line.
    pub rightskip: Glue,
    /// Glue that fills the last line.
    pub parfillskip: Glue,
    /// The target baseline-to-baseline distance.
    pub baselineskip: Glue,
    /// Interline glue when two lines come too close.
    pub lineskip: Glue,
    /// The gap below which `lineskip` takes over.
    pub lineskip_limit: Abs,
    /// The depth of the material preceding the paragraph.
    pub prev_depth: Abs,
    /// Hanging indentation; negative values hang on the right.
    pub hang_indent: Abs,
    /// From which line hanging indentation applies. A negative value `-n`
    /// applies it to the first `n` lines instead.
    pub hang_after: i32,
    /// Per-line shape overrides, taking precedence over hanging indentation.
    pub parshape: Parshape,
}

impl Default for Paragraph {
    fn default() -> Self {
        Self {
            hsize: Abs::raw(469.75),
            tolerance: 200.0,
            line_penalty: 10,
            adj_demerits: 10_000,
            leftskip: Glue::new(Abs::zero()),
            rightskip: Glue::new(Abs::zero()),
            parfillskip: Glue::new(Abs::zero())
                .with_stretch(Abs::raw(1.0), GlueOrder::Fil),
            baselineskip: Glue::new(Abs::raw(12.0))
                .with_stretch(Abs::raw(2.0), GlueOrder::Normal),
            lineskip: Glue::new(Abs::raw(3.0)),
            lineskip_limit: Abs::raw(2.0),
            prev_depth: Abs::zero(),
            hang_indent: Abs::zero(),
            hang_after: 1,
            parshape: Parshape::new(),
        }
    }
}

impl Paragraph {
    /// Terminate a horizontal list so that it can be broken into lines.
    ///
    /// Drops a trailing glue, then appends a forbidden break, the
    /// `parfillskip` and a forced break. The fill makes the last line's
    /// slack free; the forced break guarantees a terminal breakpoint.
    pub fn prepare(&self, hlist: &mut List) {
        if hlist.is_empty() {
            return;
        }
        if matches!(hlist.last(), Some(Node::Glue(_))) {
            hlist.pop();
        }
        hlist.push(Node::Penalty(Penalty::new(Penalty::INF)));
        hlist.push(Node::Glue(self.parfillskip.clone()));
        hlist.push(Node::Penalty(Penalty::new(-Penalty::INF)));
    }

    /// Break a prepared list into lines and stack them into a vertical list.
    pub fn create(&self, hlist: &List) -> TypesetResult<List> {
        if hlist.is_empty() {
            return Ok(List::new());
        }
        let breakpoints = self.break_points(hlist)?;
        Ok(self.create_with(hlist, &breakpoints))
    }

    /// Stack the lines of an already chosen breakpoint path.
    pub fn create_with(&self, hlist: &List, breakpoints: &[Breakpoint]) -> List {
        let mut out = List::new();
        let mut builder = VListBuilder::new(
            self.baselineskip.clone(),
            self.lineskip.clone(),
            self.lineskip_limit,
            self.prev_depth,
        );

        let mut start = 0;
        let mut iter = breakpoints.iter().skip(1).peekable();
        while let Some(bp) = iter.next() {
            let line = self.create_line(bp.line - 1, &hlist[start..bp.position]);
            builder.push(&mut out, line);
            start = bp.position;
            if let Some(next) = iter.peek() {
                while start < next.position && hlist[start].is_discardable() {
                    start += 1;
                }
            }
        }

        out
    }

    /// Select the optimal breakpoint path for a prepared list.
    ///
    /// The returned path starts with the synthetic breakpoint at the list's
    /// beginning; consecutive entries delimit the lines.
    pub fn break_points(&self, hlist: &List) -> TypesetResult<Vec<Breakpoint>> {
        let (arena, active) = self.feasible_breakpoints(hlist)?;

        let mut best = active[0];
        for &id in &active[1..] {
            if arena[id].demerits < arena[best].demerits {
                best = id;
            }
        }

        let mut path = Vec::new();
        let mut cursor = Some(best);
        while let Some(id) = cursor {
            let node = &arena[id];
            path.push(Breakpoint {
                position: node.position,
                demerits: node.demerits,
                line: node.line,
                fitness: node.fitness,
                totals: node.totals,
            });
            cursor = node.previous;
        }
        path.reverse();

        Ok(path)
    }

    /// The length of the given line under the parshape and hanging
    /// indentation policies.
    pub fn line_length(&self, line: usize) -> Abs {
        if let Some(last) = self.parshape.last() {
            return self.parshape.get(line).unwrap_or(last).length;
        }
        if !self.hang_indent.is_zero() && self.hang_applies(line) {
            return self.hsize - self.hang_indent.abs();
        }
        self.hsize
    }

    /// Whether hanging indentation applies to the given line.
    fn hang_applies(&self, line: usize) -> bool {
        if self.hang_after < 0 {
            (line as i32) < -self.hang_after
        } else {
            self.hang_after <= line as i32
        }
    }

    /// Run the breakpoint search over the whole list.
    ///
    /// Returns the breakpoint arena and the surviving active set, which
    /// after the final forced break holds only terminal breakpoints.
    fn feasible_breakpoints(
        &self,
        hlist: &List,
    ) -> TypesetResult<(Vec<ActiveNode>, Vec<usize>)> {
        if matches!(hlist.last(), Some(last) if !last.forces_break()) {
            return Err(TypesetError::MalformedInput(
                "horizontal list does not end in a forced break",
            ));
        }

        let mut arena = vec![ActiveNode {
            position: 0,
            demerits: 0,
            line: 0,
            fitness: Fitness::Tight,
            totals: Totals::default(),
            previous: None,
        }];
        let mut active = vec![0];
        let mut sum = Totals::default();
        let mut prev_is_box = false;

        for (pos, node) in hlist.iter().enumerate() {
            match node {
                Node::Box(b) => sum.width += b.width,
                Node::Glue(g) => {
                    if prev_is_box {
                        self.try_break(&mut arena, &mut active, hlist, pos, node, &sum);
                    }
                    sum.width += g.space;
                    g.accumulate(&mut sum.shrink, &mut sum.stretch);
                }
                Node::Kern(k) => sum.width += k.space,
                Node::Penalty(p) => {
                    if !p.forbids_break() {
                        self.try_break(&mut arena, &mut active, hlist, pos, node, &sum);
                    }
                }
            }
            prev_is_box = matches!(node, Node::Box(_));
        }

        if active.is_empty() {
            return Err(TypesetError::CannotTypeset);
        }
        Ok((arena, active))
    }

    /// Attempt to break at the given position against every active
    /// breakpoint.
    ///
    /// The active list is ordered by line number. Per line group, the least
    /// demerits candidate of each fitness class becomes a new active
    /// breakpoint for the next line. Breakpoints whose line can no longer
    /// shrink far enough are deactivated, as is everything at a forced
    /// break.
    fn try_break(
        &self,
        arena: &mut Vec<ActiveNode>,
        active: &mut Vec<usize>,
        hlist: &List,
        pos: usize,
        node: &Node,
        sum: &Totals,
    ) {
        let forced = node.forces_break();
        let penalty = match node {
            Node::Penalty(p) => p.value,
            _ => 0,
        };

        let mut i = 0;
        while i < active.len() {
            let group = arena[active[i]].line;
            let mut best: [Option<(usize, i64)>; 4] = [None; 4];

            while i < active.len() && arena[active[i]].line == group {
                let id = active[i];
                let ratio = self.glue_ratio(sum, &arena[id], group);

                if ratio < -1.0 || forced {
                    active.remove(i);
                } else {
                    i += 1;
                }

                if (-1.0..=self.tolerance).contains(&ratio) {
                    let fitness = Fitness::of(ratio);
                    let mut d = demerits(self.line_penalty, badness(ratio), penalty);
                    if !fitness.compatible(arena[id].fitness) {
                        d += self.adj_demerits;
                    }
                    d += arena[id].demerits;

                    let slot = &mut best[fitness as usize];
                    if slot.map_or(true, |(_, least)| d < least) {
                        *slot = Some((id, d));
                    }
                }
            }

            // The new breakpoints' totals start past the discardables that a
            // break here would consume.
            let totals = squeeze_discardables(*sum, hlist, pos);
            for (class, slot) in best.iter().enumerate() {
                if let Some((previous, demerits)) = *slot {
                    debug_assert!(arena[previous].line == group);
                    arena.push(ActiveNode {
                        position: pos,
                        demerits,
                        line: group + 1,
                        fitness: Fitness::from_index(class),
                        totals,
                        previous: Some(previous),
                    });
                    active.insert(i, arena.len() - 1);
                    i += 1;
                }
            }
        }
    }

    /// The glue ratio of the line from an active breakpoint to the current
    /// position.
    ///
    /// An infinite-order surplus absorbs any slack, so the ratio is zero.
    /// A finite surplus without finite flexibility cannot be set; the
    /// unviable marker [`Penalty::INF`] is never within tolerance.
    fn glue_ratio(&self, sum: &Totals, active: &ActiveNode, line: usize) -> f64 {
        let mut width = sum.width - active.totals.width;
        width -= self.leftskip.space + self.rightskip.space;
        let target = self.line_length(line);

        let (skips_shrink, skips_stretch) = self.skips_flex();
        if width < target {
            let diff = sum.stretch + skips_stretch - active.totals.stretch;
            if diff.order() != GlueOrder::Normal {
                return 0.0;
            }
            if diff.normal > Abs::zero() {
                (target - width) / diff.normal
            } else {
                Penalty::INF as f64
            }
        } else if width > target {
            let diff = sum.shrink + skips_shrink - active.totals.shrink;
            if diff.order() != GlueOrder::Normal {
                return 0.0;
            }
            if diff.normal > Abs::zero() {
                (target - width) / diff.normal
            } else {
                Penalty::INF as f64
            }
        } else {
            0.0
        }
    }

    /// The combined flexibility of the left and right skips.
    fn skips_flex(&self) -> (Flex, Flex) {
        let mut shrink = Flex::zero();
        let mut stretch = Flex::zero();
        self.leftskip.accumulate(&mut shrink, &mut stretch);
        self.rightskip.accumulate(&mut shrink, &mut stretch);
        (shrink, stretch)
    }

    /// Assemble one line from the nodes between two breakpoints.
    ///
    /// An applicable parshape or hanging indent materializes as a kern and
    /// widens the box target by the indent, so the content still fills the
    /// stated line length.
    fn create_line(&self, line: usize, content: &[Node]) -> BoxNode {
        let mut list = List::with_capacity(content.len() + 4);

        if let Some(last) = self.parshape.last() {
            let spec = *self.parshape.get(line).unwrap_or(last);
            list.push(Node::Kern(Kern::new(spec.indent)));
            list.push(Node::Glue(self.leftskip.clone()));
            list.extend_from_slice(content);
            list.push(Node::Glue(self.rightskip.clone()));
            hbox_to(list, self.line_length(line) + spec.indent)
        } else if !self.hang_indent.is_zero() && self.hang_applies(line) {
            if self.hang_indent > Abs::zero() {
                list.push(Node::Kern(Kern::new(self.hang_indent)));
            }
            list.push(Node::Glue(self.leftskip.clone()));
            list.extend_from_slice(content);
            list.push(Node::Glue(self.rightskip.clone()));
            if self.hang_indent < Abs::zero() {
                list.push(Node::Kern(Kern::new(self.hang_indent.abs())));
            }
            hbox_to(list, self.line_length(line) + self.hang_indent.abs())
        } else {
            list.push(Node::Glue(self.leftskip.clone()));
            list.extend_from_slice(content);
            list.push(Node::Glue(self.rightskip.clone()));
            hbox_to(list, self.line_length(line))
        }
    }
}

/// Totals from a breakpoint up to the next box or forced break.
fn squeeze_discardables(mut sum: Totals, hlist: &List, from: usize) -> Totals {
    for (pos, node) in hlist.iter().enumerate().skip(from) {
        match node {
            Node::Glue(g) => {
                sum.width += g.space;
                g.accumulate(&mut sum.shrink, &mut sum.stretch);
            }
            Node::Kern(k) => sum.width += k.space,
            Node::Box(_) => break,
            Node::Penalty(p) => {
                if pos != from && p.forces_break() {
                    break;
                }
            }
        }
    }
    sum
}

/// How bad a line set at the given glue ratio looks, between 0 and 10000.
fn badness(ratio: f64) -> i32 {
    ((100.0 * ratio.abs().powi(3)) as i32).min(10_000)
}

/// The cost of a line: badness and line penalty squared, adjusted by the
/// cost of the break that ends it.
fn demerits(line_penalty: i32, badness: i32, penalty: i32) -> i64 {
    let base = (line_penalty as i64 + badness as i64).pow(2);
    if (0..Penalty::INF).contains(&penalty) {
        base + (penalty as i64).pow(2)
    } else if -Penalty::INF < penalty && penalty < 0 {
        base - (penalty as i64).pow(2)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::TypesetError;
    use crate::geom::Point;
    use crate::layout::read;
    use crate::node::{Axis, BoxKind, ListBox};

    fn word(width: f64) -> Node {
        Node::Box(BoxNode::rule(Abs::raw(width), Abs::raw(7.0), Abs::raw(3.0)))
    }

    fn space() -> Node {
        Node::Glue(
            Glue::new(Abs::raw(5.0))
                .with_stretch(Abs::raw(3.0), GlueOrder::Normal)
                .with_shrink(Abs::raw(2.0), GlueOrder::Normal),
        )
    }

    fn paragraph(hsize: f64) -> Paragraph {
        Paragraph { hsize: Abs::raw(hsize), ..Default::default() }
    }

    /// The line boxes of an assembled vertical list.
    fn lines(out: &List) -> Vec<&BoxNode> {
        out.iter()
            .filter_map(|node| match node {
                Node::Box(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_word_paragraph() {
        let par = paragraph(100.0);
        let mut hlist = vec![word(50.0)];
        par.prepare(&mut hlist);

        let breakpoints = par.break_points(&hlist).unwrap();
        assert_eq!(breakpoints.len(), 2);
        assert_eq!(breakpoints[1].line, 1);
        assert_eq!(breakpoints[1].position, hlist.len() - 1);
        // One perfect line: no badness, just the squared line penalty.
        assert_eq!(breakpoints[1].demerits, 100);

        let out = par.create(&hlist).unwrap();
        let lines = lines(&out);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width, Abs::raw(100.0));
        // The fill absorbs the slack of the last line.
        assert_eq!(lines[0].as_list().unwrap().order, GlueOrder::Fil);
    }

    #[test]
    fn test_two_line_paragraph() {
        let par = paragraph(55.0);
        let mut hlist = vec![
            word(25.0), space(), word(25.0), space(), word(25.0), space(), word(25.0),
        ];
        par.prepare(&mut hlist);

        let breakpoints = par.break_points(&hlist).unwrap();
        assert_eq!(breakpoints.len(), 3);
        assert_eq!(breakpoints[1].position, 3);
        assert_eq!(breakpoints[2].line, 2);
        assert_eq!(breakpoints[2].demerits, 200);

        // Adjacent lines' fitness classes stay within one step.
        let steps = (breakpoints[1].fitness as i32 - breakpoints[2].fitness as i32).abs();
        assert!(steps <= 1);

        let out = par.create(&hlist).unwrap();
        let lines = lines(&out);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line.width, Abs::raw(55.0));
        }
    }

    #[test]
    fn test_forced_break_is_honored() {
        let par = paragraph(55.0);
        let mut hlist = vec![
            word(25.0),
            space(),
            word(25.0),
            Node::Penalty(Penalty::new(-Penalty::INF)),
            word(25.0),
        ];
        par.prepare(&mut hlist);

        let breakpoints = par.break_points(&hlist).unwrap();
        assert_eq!(breakpoints[1].position, 3);
        assert!(hlist[3].forces_break());

        // The next line starts at the word after the break, not at a
        // discardable.
        let out = par.create(&hlist).unwrap();
        let lines = lines(&out);
        assert_eq!(lines.len(), 2);
        let second = lines[1].as_list().unwrap();
        assert!(matches!(second.children[0], Node::Glue(_)));
        assert!(matches!(second.children[1], Node::Box(_)));
    }

    #[test]
    fn test_forbidden_break_is_respected() {
        // Shrinkable interword glue, so that a line of three words can
        // still be set when the guarded two-word break is unavailable.
        let tight_space = || {
            Node::Glue(
                Glue::new(Abs::raw(5.0))
                    .with_stretch(Abs::raw(3.0), GlueOrder::Normal)
                    .with_shrink(Abs::raw(15.0), GlueOrder::Normal),
            )
        };
        let par = paragraph(55.0);
        let mut hlist = vec![
            word(25.0),
            tight_space(),
            word(25.0),
            Node::Penalty(Penalty::new(Penalty::INF)),
            tight_space(),
            word(25.0),
            tight_space(),
            word(25.0),
        ];
        par.prepare(&mut hlist);

        let breakpoints = par.break_points(&hlist).unwrap();
        assert!(breakpoints.len() > 2);
        for bp in &breakpoints {
            assert!(!hlist[bp.position].forbids_break());
            // The glue guarded by the penalty is no break either since its
            // predecessor is not a box.
            assert_ne!(bp.position, 4);
        }
    }

    #[test]
    fn test_parshape_shapes_first_line() {
        let par = Paragraph {
            parshape: vec![
                ParshapeSpec { indent: Abs::raw(10.0), length: Abs::raw(35.0) },
                ParshapeSpec { indent: Abs::zero(), length: Abs::raw(55.0) },
            ],
            ..paragraph(55.0)
        };
        let mut hlist = vec![
            word(15.0), space(), word(15.0), space(), word(15.0), space(), word(15.0),
        ];
        par.prepare(&mut hlist);

        let out = par.create(&hlist).unwrap();
        let lines = lines(&out);
        assert_eq!(lines.len(), 2);

        // The indent kern widens the first line's box beyond its length.
        assert_eq!(lines[0].width, Abs::raw(45.0));
        let first = lines[0].as_list().unwrap();
        assert!(matches!(first.children[0], Node::Kern(k) if k.space == Abs::raw(10.0)));

        assert_eq!(lines[1].width, Abs::raw(55.0));
        let second = lines[1].as_list().unwrap();
        assert!(matches!(second.children[0], Node::Kern(k) if k.space == Abs::zero()));
    }

    #[test]
    fn test_fitness_jump_is_charged() {
        // The forced break leaves the first line stretched to ratio 1,
        // three fitness classes away from the tight start.
        let par = paragraph(55.0);
        let mut hlist = vec![
            word(20.0),
            Node::Glue(
                Glue::new(Abs::raw(5.0)).with_stretch(Abs::raw(10.0), GlueOrder::Normal),
            ),
            word(20.0),
            Node::Penalty(Penalty::new(-Penalty::INF)),
            word(20.0),
        ];
        par.prepare(&mut hlist);

        let breakpoints = par.break_points(&hlist).unwrap();
        assert_eq!(breakpoints[1].fitness, Fitness::Loose);
        assert_eq!(breakpoints[1].demerits, 110 * 110 + par.adj_demerits);
        assert_eq!(breakpoints[2].fitness, Fitness::Decent);
        assert_eq!(breakpoints[2].demerits, 110 * 110 + par.adj_demerits + 100);
    }

    #[test]
    fn test_hanging_indent() {
        let par = Paragraph {
            hang_indent: Abs::raw(20.0),
            hang_after: 1,
            ..paragraph(55.0)
        };
        assert_eq!(par.line_length(0), Abs::raw(55.0));
        assert_eq!(par.line_length(1), Abs::raw(35.0));

        let par = Paragraph {
            hang_indent: Abs::raw(-20.0),
            hang_after: -1,
            ..paragraph(55.0)
        };
        assert_eq!(par.line_length(0), Abs::raw(35.0));
        assert_eq!(par.line_length(1), Abs::raw(55.0));
    }

    #[test]
    fn test_overfull_word_cannot_be_typeset() {
        let par = paragraph(55.0);
        let mut hlist = vec![word(100.0)];
        par.prepare(&mut hlist);
        assert_eq!(par.create(&hlist), Err(TypesetError::CannotTypeset));
    }

    #[test]
    fn test_unprepared_list_is_malformed() {
        let par = paragraph(55.0);
        let hlist = vec![word(10.0)];
        assert!(matches!(
            par.break_points(&hlist),
            Err(TypesetError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_empty_paragraph() {
        let par = paragraph(55.0);
        let mut hlist = List::new();
        par.prepare(&mut hlist);
        assert!(hlist.is_empty());
        assert!(par.create(&hlist).unwrap().is_empty());
    }

    #[test]
    fn test_breaking_is_deterministic() {
        let par = paragraph(55.0);
        let mut hlist = vec![
            word(25.0), space(), word(25.0), space(), word(25.0), space(), word(25.0),
        ];
        par.prepare(&mut hlist);

        let a = par.break_points(&hlist).unwrap();
        let b = par.break_points(&hlist).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_demerits_grow_along_the_path() {
        let par = paragraph(55.0);
        let mut hlist = vec![
            word(25.0), space(), word(25.0), space(), word(25.0), space(), word(25.0),
        ];
        par.prepare(&mut hlist);

        let breakpoints = par.break_points(&hlist).unwrap();
        for pair in breakpoints.windows(2) {
            assert!(pair[0].demerits <= pair[1].demerits);
            assert!(pair[0].position <= pair[1].position);
            assert_eq!(pair[0].line + 1, pair[1].line);
        }
    }

    #[test]
    fn test_assembled_lines_balance_their_width() {
        let par = paragraph(55.0);
        let mut hlist = vec![
            word(20.0), space(), word(30.0), space(), word(25.0), space(), word(20.0),
        ];
        par.prepare(&mut hlist);

        let out = par.create(&hlist).unwrap();
        for line in lines(&out) {
            let list = line.as_list().unwrap();
            let mut set = Abs::zero();
            for node in &list.children {
                match node {
                    Node::Box(b) => set += b.width,
                    Node::Kern(k) => set += k.space,
                    Node::Glue(g) => {
                        set += g.space;
                        if list.ratio < 0.0 {
                            if list.order == g.shrink_order {
                                set += g.shrink * list.ratio;
                            }
                        } else if list.order == g.stretch_order {
                            set += g.stretch * list.ratio;
                        }
                    }
                    Node::Penalty(_) => {}
                }
            }
            assert!(set.approx_eq(line.width));
        }
    }

    #[test]
    fn test_vertical_list_reads_back_with_positions() {
        let par = paragraph(55.0);
        let mut hlist = vec![
            word(25.0), space(), word(25.0), space(), word(25.0), space(), word(25.0),
        ];
        par.prepare(&mut hlist);

        let out = par.create(&hlist).unwrap();
        let page = crate::layout::vbox(out);

        let mut baselines = Vec::new();
        read(&page, |boxed, pos: Point| {
            if matches!(
                boxed.kind,
                BoxKind::List(ListBox { axis: Axis::Horizontal, .. })
            ) {
                baselines.push(pos.y);
            }
        });

        // First line sits below the interline glue; the second follows at
        // the baseline distance.
        assert_eq!(baselines.len(), 2);
        assert_eq!(baselines[1] - baselines[0], Abs::raw(12.0));
    }
}
