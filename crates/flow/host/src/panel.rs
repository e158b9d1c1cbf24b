//! Retained flow container: owns its elements in an arena, tracks invalidation, and runs
//! auto-size reconciliation before each layout pass.

use core::fmt;

use anyhow::{Context as _, Result, anyhow};
use flow_engine::{
    AxisRole, Edges, Element, ElementResolver, FlowConfig, FlowDirection, FlowError,
    PreferredSizeResolver, Rect, Size, arrange, check_size, measure,
};
use indextree::{Arena, Node, NodeId};
use log::debug;
use tracing::info_span;

use crate::autosize::{
    AutoSizeMode, HostRoles, ReconcileInputs, SizeLimits, measurement_proposal, reconcile_size,
};

/// Handle to an element owned by a [`FlowPanel`].
///
/// Handles stay valid across insertions and layout passes; they go stale once the element
/// is removed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(NodeId);

#[derive(Debug)]
enum PanelNode {
    Root,
    Element(Slot),
}

#[derive(Debug)]
struct Slot {
    element: Element,
    /// Bounds from the last completed pass; `None` while hidden or never laid out.
    bounds: Option<Rect>,
}

/// Result of one host layout pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LayoutOutcome {
    /// Panel bounds after auto-size reconciliation.
    pub bounds: Rect,
    /// True when the pass changed the panel's own size; the parent should re-arrange.
    pub size_changed: bool,
    pub line_count: usize,
}

pub struct FlowPanel {
    arena: Arena<PanelNode>,
    root: NodeId,
    config: FlowConfig,
    auto_size: AutoSizeMode,
    roles: HostRoles,
    limits: SizeLimits,
    explicit_size: Size,
    bounds: Rect,
    parent_extent: Option<Size>,
    resolver: Box<dyn ElementResolver>,
    layout_dirty: bool,
    layout_passes: u64,
}

impl fmt::Debug for FlowPanel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FlowPanel")
            .field("config", &self.config)
            .field("auto_size", &self.auto_size)
            .field("bounds", &self.bounds)
            .field("elements", &self.len())
            .field("layout_dirty", &self.layout_dirty)
            .finish_non_exhaustive()
    }
}

impl Default for FlowPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowPanel {
    /// Empty panel using each element's preferred size as its resolved size.
    pub fn new() -> Self {
        Self::with_resolver(Box::new(PreferredSizeResolver))
    }

    pub fn with_resolver(resolver: Box<dyn ElementResolver>) -> Self {
        let mut arena = Arena::new();
        Self {
            root: arena.new_node(PanelNode::Root),
            arena,
            config: FlowConfig::default(),
            auto_size: AutoSizeMode::default(),
            roles: HostRoles::default(),
            limits: SizeLimits::default(),
            explicit_size: Size::ZERO,
            bounds: Rect::default(),
            parent_extent: None,
            resolver,
            layout_dirty: true,
            layout_passes: 0,
        }
    }

    #[inline]
    pub const fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FlowConfig) {
        if self.config != config {
            self.config = config;
            self.invalidate("config");
        }
    }

    pub fn set_direction(&mut self, direction: FlowDirection) {
        self.set_config(self.config.with_direction(direction));
    }

    pub fn set_wrap_contents(&mut self, wrap_contents: bool) {
        self.set_config(self.config.with_wrap_contents(wrap_contents));
    }

    pub fn set_padding(&mut self, padding: Edges) {
        self.set_config(self.config.with_padding(padding));
    }

    #[inline]
    pub const fn auto_size(&self) -> AutoSizeMode {
        self.auto_size
    }

    pub fn set_auto_size(&mut self, mode: AutoSizeMode) {
        if self.auto_size != mode {
            self.auto_size = mode;
            self.invalidate("auto-size mode");
        }
    }

    pub fn set_host_roles(&mut self, roles: HostRoles) {
        if self.roles != roles {
            self.roles = roles;
            self.invalidate("host roles");
        }
    }

    pub fn set_size_limits(&mut self, limits: SizeLimits) {
        if self.limits != limits {
            self.limits = limits;
            self.invalidate("size limits");
        }
    }

    /// Assign the panel's explicit size. Auto-sizing may still override it on the next pass.
    ///
    /// # Errors
    /// Returns an error when either component is negative.
    pub fn set_size(&mut self, size: Size) -> Result<()> {
        check_size("panel size", size)?;
        self.explicit_size = size;
        self.bounds = Rect::new(self.bounds.x, self.bounds.y, size.width, size.height);
        self.invalidate("explicit size");
        Ok(())
    }

    /// Move the panel within its parent. Children are positioned relative to the panel, so
    /// this never invalidates layout.
    pub fn set_location(&mut self, x: i32, y: i32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    #[inline]
    pub const fn current_size(&self) -> Size {
        self.bounds.size()
    }

    #[inline]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub const fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    /// Number of completed layout passes.
    #[inline]
    pub const fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    /// Append an element at the end of the flow.
    ///
    /// # Errors
    /// Returns an error if the arena rejects the attachment.
    pub fn add(&mut self, element: Element) -> Result<ElementId> {
        let node = self.arena.new_node(PanelNode::Element(Slot {
            element,
            bounds: None,
        }));
        self.root
            .checked_append(node, &mut self.arena)
            .map_err(|err| anyhow!("appending flow element failed: {err}"))?;
        self.invalidate("element added");
        Ok(ElementId(node))
    }

    /// Insert an element immediately before `sibling` in flow order.
    ///
    /// # Errors
    /// Returns `FlowError::UnknownElement` when `sibling` is not owned by this panel.
    pub fn insert_before(&mut self, sibling: ElementId, element: Element) -> Result<ElementId> {
        self.slot(sibling)?;
        let node = self.arena.new_node(PanelNode::Element(Slot {
            element,
            bounds: None,
        }));
        sibling
            .0
            .checked_insert_before(node, &mut self.arena)
            .map_err(|err| anyhow!("inserting flow element failed: {err}"))?;
        self.invalidate("element inserted");
        Ok(ElementId(node))
    }

    /// Remove an element and return it. The handle is stale afterwards.
    ///
    /// # Errors
    /// Returns `FlowError::UnknownElement` when `id` is not owned by this panel.
    pub fn remove(&mut self, id: ElementId) -> Result<Element, FlowError> {
        let element = self.slot(id)?.element;
        id.0.remove(&mut self.arena);
        self.invalidate("element removed");
        Ok(element)
    }

    /// # Errors
    /// Returns `FlowError::UnknownElement` when `id` is not owned by this panel.
    pub fn element(&self, id: ElementId) -> Result<&Element, FlowError> {
        self.slot(id).map(|slot| &slot.element)
    }

    /// Mutate an element in place and invalidate the layout.
    ///
    /// # Errors
    /// Returns `FlowError::UnknownElement` when `id` is not owned by this panel.
    pub fn update<F>(&mut self, id: ElementId, edit: F) -> Result<(), FlowError>
    where
        F: FnOnce(&mut Element),
    {
        edit(&mut self.slot_mut(id)?.element);
        self.invalidate("element updated");
        Ok(())
    }

    /// Ask for a new line to start before this element.
    ///
    /// # Errors
    /// Returns `FlowError::UnknownElement` when `id` is not owned by this panel.
    pub fn set_flow_break(&mut self, id: ElementId, flow_break: bool) -> Result<(), FlowError> {
        if self.slot(id)?.element.flow_break == flow_break {
            return Ok(());
        }
        self.update(id, |element| element.flow_break = flow_break)
    }

    /// # Errors
    /// Returns `FlowError::UnknownElement` when `id` is not owned by this panel.
    pub fn flow_break(&self, id: ElementId) -> Result<bool, FlowError> {
        self.slot(id).map(|slot| slot.element.flow_break)
    }

    /// # Errors
    /// Returns `FlowError::UnknownElement` when `id` is not owned by this panel.
    pub fn set_cross_role(&mut self, id: ElementId, role: AxisRole) -> Result<(), FlowError> {
        self.update(id, |element| element.cross_role = role)
    }

    /// # Errors
    /// Returns `FlowError::UnknownElement` when `id` is not owned by this panel.
    pub fn set_main_role(&mut self, id: ElementId, role: AxisRole) -> Result<(), FlowError> {
        self.update(id, |element| element.main_role = role)
    }

    pub fn len(&self) -> usize {
        self.root.children(&self.arena).count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children(&self.arena).next().is_none()
    }

    /// Element handles in flow order.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.root.children(&self.arena).map(ElementId)
    }

    /// Preferred size with no constraint.
    ///
    /// # Errors
    /// Returns an error when the configuration or an element fails validation.
    pub fn preferred_size(&self) -> Result<Size> {
        self.measure(Size::ZERO)
    }

    /// Preferred size under a proposed constraint (`0` on an axis = unconstrained).
    ///
    /// # Errors
    /// Returns an error when the configuration, an element, or `proposed` fails validation.
    pub fn measure(&self, proposed: Size) -> Result<Size> {
        let _span = info_span!("flow.measure").entered();
        let (_, elements) = self.snapshot();
        measure(&elements, &self.config, proposed, self.resolver.as_ref())
            .context("measuring flow panel content")
    }

    /// Run a full pass: settle the panel's own size, then arrange every element into it.
    ///
    /// An auto-sizing panel measures its content before arranging it. Measurement is its own
    /// engine pass, so the resolver sees every visible element twice: once against the
    /// measurement proposal and once against the final content box. With
    /// `AutoSizeMode::None` it sees each element once.
    ///
    /// `parent_extent` is the space the parent offers; it replaces the extent remembered
    /// from earlier passes.
    ///
    /// # Errors
    /// Returns an error when the configuration or an element fails validation. Cached
    /// element bounds from the previous pass are kept in that case.
    pub fn perform_layout(&mut self, parent_extent: Option<Size>) -> Result<LayoutOutcome> {
        let _span = info_span!("flow.layout_pass").entered();
        self.parent_extent = parent_extent;
        self.run_pass()
            .inspect_err(|err| tracing::warn!("Failed to lay out flow panel: {err:#}"))
    }

    /// Lay out again only if something changed since the last pass.
    ///
    /// # Errors
    /// Propagates failures from [`FlowPanel::perform_layout`].
    pub fn ensure_layout(&mut self) -> Result<()> {
        if self.layout_dirty {
            self.perform_layout(self.parent_extent)?;
        }
        Ok(())
    }

    /// Bounds of an element after bringing the layout up to date. `None` for hidden elements.
    ///
    /// # Errors
    /// Returns an error for unknown handles or when the refreshing pass fails.
    pub fn layout_bounds(&mut self, id: ElementId) -> Result<Option<Rect>> {
        self.ensure_layout()?;
        Ok(self.slot(id)?.bounds)
    }

    /// Bounds from the most recent pass without triggering a new one.
    ///
    /// # Errors
    /// Returns `FlowError::UnknownElement` when `id` is not owned by this panel.
    pub fn cached_bounds(&self, id: ElementId) -> Result<Option<Rect>, FlowError> {
        self.slot(id).map(|slot| slot.bounds)
    }

    fn run_pass(&mut self) -> Result<LayoutOutcome> {
        let (ids, elements) = self.snapshot();
        let measured = if self.auto_size.measures_content() {
            let proposal = measurement_proposal(self.roles, self.parent_extent, self.limits);
            measure(&elements, &self.config, proposal, self.resolver.as_ref())
                .context("measuring flow panel for auto-size")?
        } else {
            self.explicit_size
        };
        let size = reconcile_size(&ReconcileInputs {
            mode: self.auto_size,
            explicit: self.explicit_size,
            measured,
            roles: self.roles,
            parent_extent: self.parent_extent,
            limits: self.limits,
        });
        let arrangement = arrange(
            &elements,
            &self.config,
            Rect::from_size(size),
            self.resolver.as_ref(),
        )
        .context("arranging flow panel")?;

        for id in &ids {
            if let Some(slot) = self.slot_at_mut(*id) {
                slot.bounds = None;
            }
        }
        for placement in &arrangement.placements {
            let Some(id) = ids.get(placement.index) else {
                continue;
            };
            if let Some(slot) = self.slot_at_mut(*id) {
                slot.bounds = Some(placement.bounds);
            }
        }

        let previous = self.bounds.size();
        self.bounds = Rect::new(self.bounds.x, self.bounds.y, size.width, size.height);
        self.layout_dirty = false;
        self.layout_passes += 1;
        let outcome = LayoutOutcome {
            bounds: self.bounds,
            size_changed: previous != size,
            line_count: arrangement.lines.len(),
        };
        debug!(
            target: "flow::host",
            "[FLOW-HOST] pass={} mode={:?} measured={measured:?} size={size:?} changed={} lines={}",
            self.layout_passes,
            self.auto_size,
            outcome.size_changed,
            outcome.line_count
        );
        Ok(outcome)
    }

    /// Element handles and copies of their elements, in flow order.
    fn snapshot(&self) -> (Vec<NodeId>, Vec<Element>) {
        let mut ids = Vec::new();
        let mut elements = Vec::new();
        for node in self.root.children(&self.arena) {
            if let Some(PanelNode::Element(slot)) = self.arena.get(node).map(Node::get) {
                ids.push(node);
                elements.push(slot.element);
            }
        }
        (ids, elements)
    }

    fn owns(&self, id: ElementId) -> bool {
        let Some(node) = self.arena.get(id.0) else {
            return false;
        };
        !id.0.is_removed(&self.arena) && node.parent() == Some(self.root)
    }

    fn slot(&self, id: ElementId) -> Result<&Slot, FlowError> {
        if !self.owns(id) {
            return Err(FlowError::UnknownElement);
        }
        match self.arena.get(id.0).map(Node::get) {
            Some(PanelNode::Element(slot)) => Ok(slot),
            _ => Err(FlowError::UnknownElement),
        }
    }

    fn slot_mut(&mut self, id: ElementId) -> Result<&mut Slot, FlowError> {
        if !self.owns(id) {
            return Err(FlowError::UnknownElement);
        }
        match self.arena.get_mut(id.0).map(Node::get_mut) {
            Some(PanelNode::Element(slot)) => Ok(slot),
            _ => Err(FlowError::UnknownElement),
        }
    }

    fn slot_at_mut(&mut self, node: NodeId) -> Option<&mut Slot> {
        match self.arena.get_mut(node).map(Node::get_mut) {
            Some(PanelNode::Element(slot)) => Some(slot),
            _ => None,
        }
    }

    fn invalidate(&mut self, reason: &str) {
        if !self.layout_dirty {
            debug!(target: "flow::host", "[FLOW-INVALIDATE] {reason}");
        }
        self.layout_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Resolver that counts how often it is consulted.
    struct CountingResolver {
        calls: Rc<Cell<usize>>,
    }

    impl ElementResolver for CountingResolver {
        fn resolve(&self, element: &Element, _available: Rect) -> Size {
            self.calls.set(self.calls.get() + 1);
            element.preferred_size
        }
    }

    fn panel_with(elements: &[Element]) -> (FlowPanel, Vec<ElementId>) {
        let mut panel = FlowPanel::new();
        let ids = elements
            .iter()
            .map(|element| panel.add(*element).expect("append"))
            .collect();
        (panel, ids)
    }

    #[test]
    /// # Panics
    /// Panics if a stale handle still resolves after removal.
    fn removed_handles_are_unknown() {
        let (mut panel, ids) = panel_with(&[Element::new(10, 10), Element::new(20, 20)]);
        let first = ids.first().copied().expect("first id");
        assert_eq!(
            panel.remove(first).map(|element| element.preferred_size),
            Ok(Size::new(10, 10))
        );
        assert_eq!(panel.element(first).err(), Some(FlowError::UnknownElement));
        assert_eq!(panel.remove(first).err(), Some(FlowError::UnknownElement));
        assert_eq!(panel.len(), 1);
    }

    #[test]
    /// # Panics
    /// Panics if a handle from another panel is accepted.
    fn foreign_handles_are_unknown() {
        let (panel, _) = panel_with(&[Element::new(10, 10)]);
        let (_, foreign) =
            panel_with(&[Element::new(1, 1), Element::new(2, 2), Element::new(3, 3)]);
        let last = foreign.last().copied().expect("foreign id");
        assert_eq!(panel.element(last).err(), Some(FlowError::UnknownElement));
    }

    #[test]
    /// # Panics
    /// Panics if mutations do not mark the layout dirty, or a pass does not clear it.
    fn mutations_invalidate_layout() {
        let (mut panel, ids) = panel_with(&[Element::new(10, 10)]);
        panel.set_size(Size::new(100, 100)).expect("size");
        assert!(panel.is_layout_dirty());
        panel.perform_layout(None).expect("layout");
        assert!(!panel.is_layout_dirty());

        panel.set_location(40, 40);
        assert!(!panel.is_layout_dirty(), "moving the panel keeps child layout");

        let first = ids.first().copied().expect("first id");
        panel.set_flow_break(first, false).expect("same value");
        assert!(!panel.is_layout_dirty(), "unchanged break marker is a no-op");
        panel.set_flow_break(first, true).expect("break");
        assert!(panel.is_layout_dirty());
    }

    #[test]
    /// # Panics
    /// Panics if `ensure_layout` runs a pass when nothing changed.
    fn ensure_layout_skips_clean_panels() {
        let (mut panel, ids) = panel_with(&[Element::new(10, 10)]);
        panel.set_size(Size::new(50, 50)).expect("size");
        let first = ids.first().copied().expect("first id");
        assert_eq!(
            panel.layout_bounds(first).expect("bounds"),
            Some(Rect::new(3, 3, 10, 10))
        );
        assert_eq!(
            panel.layout_bounds(first).expect("bounds"),
            Some(Rect::new(3, 3, 10, 10))
        );
        assert_eq!(panel.layout_passes(), 1);
    }

    #[test]
    /// # Panics
    /// Panics if insertion does not respect flow order.
    fn insert_before_places_element_first() {
        let (mut panel, ids) = panel_with(&[Element::new(10, 10)]);
        let first = ids.first().copied().expect("first id");
        let inserted = panel.insert_before(first, Element::new(30, 10)).expect("insert");
        let order: Vec<ElementId> = panel.ids().collect();
        assert_eq!(order, vec![inserted, first]);
    }

    #[test]
    /// # Panics
    /// Panics if a negative explicit size is accepted.
    fn negative_size_rejected() {
        let mut panel = FlowPanel::new();
        assert!(panel.set_size(Size::new(-1, 10)).is_err());
        assert_eq!(panel.current_size(), Size::ZERO);
    }

    #[test]
    /// # Panics
    /// Panics if a failing pass clears cached bounds or the dirty flag.
    fn failed_pass_keeps_previous_results() {
        let (mut panel, ids) = panel_with(&[Element::new(10, 10)]);
        panel.set_size(Size::new(100, 100)).expect("size");
        panel.perform_layout(None).expect("layout");
        panel.set_padding(Edges::new(-1, 0, 0, 0));
        assert!(panel.perform_layout(None).is_err());
        assert!(panel.is_layout_dirty());
        let first = ids.first().copied().expect("first id");
        assert_eq!(panel.cached_bounds(first), Ok(Some(Rect::new(3, 3, 10, 10))));
    }

    #[test]
    /// # Panics
    /// Panics if the resolver is not consulted once per element for arrangement, plus once
    /// more for measurement when the panel auto-sizes.
    fn resolver_calls_per_pass() {
        let calls = Rc::new(Cell::new(0));
        let mut panel = FlowPanel::with_resolver(Box::new(CountingResolver {
            calls: Rc::clone(&calls),
        }));
        panel.add(Element::new(10, 10)).expect("append");
        panel.add(Element::new(20, 10).with_visible(false)).expect("append");
        panel.add(Element::new(30, 10)).expect("append");
        panel.set_size(Size::new(200, 50)).expect("size");

        panel.perform_layout(None).expect("layout");
        assert_eq!(calls.get(), 2);

        calls.set(0);
        panel.set_auto_size(AutoSizeMode::GrowAndShrink);
        panel.perform_layout(None).expect("layout");
        assert_eq!(calls.get(), 4);
    }
}
