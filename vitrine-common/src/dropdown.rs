//! Navigation dropdown state
//!
//! Narrow viewports keep the submenu permanently expanded inside the mobile
//! menu. Wide viewports open it on hover and close it after a short grace
//! delay once the pointer leaves, so a diagonal move toward the submenu does
//! not flicker it shut.
//!
//! The delayed close is identified by a [`CloseTicket`]. The binding layer
//! owns the real timer; when it fires it hands the ticket back, and the close
//! is applied only if that ticket is still the pending one. Cancelling or
//! rescheduling invalidates older tickets, so a stale timer can never close
//! a dropdown that was re-entered.

use crate::viewport::Breakpoint;

/// Identity of one scheduled close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(u64);

/// What the binding must do with its close timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerCommand {
    /// Leave any running timer alone
    #[default]
    Keep,
    /// Drop any running timer and start a new one for this ticket
    Schedule(CloseTicket),
    /// Drop any running timer
    Cancel,
}

/// Result of feeding one event into a dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownEffect {
    /// Presentation must be rewritten
    pub changed: bool,
    /// The triggering event's default action (link navigation) is suppressed
    pub prevent_default: bool,
    pub timer: TimerCommand,
}

/// Presentation attributes for one dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownPresentation {
    /// `open` class on the `.nav-item.dropdown` (desktop hover)
    pub item_open: bool,
    /// `active` class on the `.dropdown-menu` (mobile forced-open)
    pub menu_active: bool,
    /// aria-expanded on the `.dropdown-toggle`
    pub aria_expanded: bool,
}

/// State of a single `.nav-item.dropdown`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownState {
    breakpoint: Breakpoint,
    hover_open: bool,
    pending_close: Option<CloseTicket>,
    next_ticket: u64,
}

impl DropdownState {
    pub fn new(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            hover_open: false,
            pending_close: None,
            next_ticket: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.breakpoint.is_narrow() || self.hover_open
    }

    pub fn pending_close(&self) -> Option<CloseTicket> {
        self.pending_close
    }

    pub fn presentation(&self) -> DropdownPresentation {
        match self.breakpoint {
            Breakpoint::Narrow => DropdownPresentation {
                item_open: false,
                menu_active: true,
                aria_expanded: true,
            },
            Breakpoint::Wide => DropdownPresentation {
                item_open: self.hover_open,
                menu_active: false,
                aria_expanded: self.hover_open,
            },
        }
    }

    /// Click, Enter or Space on the toggle.
    ///
    /// On narrow viewports the toggle is a disclosure control and never
    /// navigates; the dropdown is already forced open. On wide viewports the
    /// toggle is an ordinary link.
    pub fn activate(&mut self) -> DropdownEffect {
        match self.breakpoint {
            Breakpoint::Narrow => DropdownEffect {
                changed: true,
                prevent_default: true,
                timer: TimerCommand::Keep,
            },
            Breakpoint::Wide => DropdownEffect::default(),
        }
    }

    pub fn pointer_enter_item(&mut self) -> DropdownEffect {
        if self.breakpoint.is_narrow() {
            return DropdownEffect::default();
        }
        let changed = !self.hover_open;
        self.hover_open = true;
        DropdownEffect {
            changed,
            prevent_default: false,
            timer: self.cancel_pending(),
        }
    }

    pub fn pointer_enter_menu(&mut self) -> DropdownEffect {
        if self.breakpoint.is_narrow() {
            return DropdownEffect::default();
        }
        DropdownEffect {
            changed: false,
            prevent_default: false,
            timer: self.cancel_pending(),
        }
    }

    /// Pointer moved onto the toggle, possibly from the submenu without
    /// leaving the item. Keeps the dropdown open and drops a pending close.
    pub fn pointer_enter_toggle(&mut self) -> DropdownEffect {
        self.pointer_enter_item()
    }

    /// Pointer left the item or the submenu
    pub fn pointer_leave(&mut self) -> DropdownEffect {
        if self.breakpoint.is_narrow() || !self.hover_open {
            return DropdownEffect::default();
        }
        let ticket = CloseTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending_close = Some(ticket);
        DropdownEffect {
            changed: false,
            prevent_default: false,
            timer: TimerCommand::Schedule(ticket),
        }
    }

    /// Click whose target is outside the dropdown item
    pub fn outside_click(&mut self) -> DropdownEffect {
        if self.breakpoint.is_narrow() {
            return DropdownEffect::default();
        }
        let changed = self.hover_open;
        self.hover_open = false;
        DropdownEffect {
            changed,
            prevent_default: false,
            timer: self.cancel_pending(),
        }
    }

    /// The close timer for `ticket` elapsed
    pub fn close_timer_fired(&mut self, ticket: CloseTicket) -> DropdownEffect {
        if self.pending_close != Some(ticket) {
            return DropdownEffect::default();
        }
        self.pending_close = None;
        let changed = self.hover_open;
        self.hover_open = false;
        DropdownEffect {
            changed,
            prevent_default: false,
            timer: TimerCommand::Keep,
        }
    }

    /// Re-evaluate the mode after a resize. Only a breakpoint crossing
    /// changes anything.
    pub fn sync_viewport(&mut self, breakpoint: Breakpoint) -> DropdownEffect {
        if breakpoint == self.breakpoint {
            return DropdownEffect::default();
        }
        self.breakpoint = breakpoint;
        self.hover_open = false;
        DropdownEffect {
            changed: true,
            prevent_default: false,
            timer: self.cancel_pending(),
        }
    }

    fn cancel_pending(&mut self) -> TimerCommand {
        match self.pending_close.take() {
            Some(_) => TimerCommand::Cancel,
            None => TimerCommand::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide() -> DropdownState {
        DropdownState::new(Breakpoint::Wide)
    }

    fn scheduled(effect: DropdownEffect) -> CloseTicket {
        match effect.timer {
            TimerCommand::Schedule(ticket) => ticket,
            other => panic!("expected a scheduled close, got {:?}", other),
        }
    }

    #[test]
    fn test_narrow_is_always_expanded() {
        let mut dd = DropdownState::new(Breakpoint::Narrow);
        assert!(dd.presentation().aria_expanded);

        dd.pointer_enter_item();
        dd.pointer_leave();
        dd.outside_click();
        dd.activate();
        dd.sync_viewport(Breakpoint::Narrow);

        let p = dd.presentation();
        assert!(p.aria_expanded);
        assert!(p.menu_active);
        assert!(!p.item_open);
        assert_eq!(dd.pending_close(), None);
    }

    #[test]
    fn test_narrow_activation_prevents_navigation() {
        let mut dd = DropdownState::new(Breakpoint::Narrow);
        assert!(dd.activate().prevent_default);
    }

    #[test]
    fn test_wide_activation_is_a_plain_link() {
        let mut dd = wide();
        assert_eq!(dd.activate(), DropdownEffect::default());
    }

    #[test]
    fn test_hover_opens() {
        let mut dd = wide();
        let effect = dd.pointer_enter_item();
        assert!(effect.changed);
        let p = dd.presentation();
        assert!(p.item_open);
        assert!(p.aria_expanded);
        assert!(!p.menu_active);
    }

    #[test]
    fn test_leave_schedules_close() {
        let mut dd = wide();
        dd.pointer_enter_item();
        let ticket = scheduled(dd.pointer_leave());
        // Still open during the grace delay
        assert!(dd.is_open());

        let effect = dd.close_timer_fired(ticket);
        assert!(effect.changed);
        assert!(!dd.is_open());
        assert!(!dd.presentation().aria_expanded);
    }

    #[test]
    fn test_reenter_cancels_close() {
        let mut dd = wide();
        dd.pointer_enter_item();
        let ticket = scheduled(dd.pointer_leave());

        assert_eq!(dd.pointer_enter_item().timer, TimerCommand::Cancel);
        // The cancelled timer firing anyway must not close
        assert_eq!(dd.close_timer_fired(ticket), DropdownEffect::default());
        assert!(dd.is_open());
    }

    #[test]
    fn test_entering_submenu_cancels_close() {
        let mut dd = wide();
        dd.pointer_enter_item();
        let ticket = scheduled(dd.pointer_leave());

        assert_eq!(dd.pointer_enter_menu().timer, TimerCommand::Cancel);
        dd.close_timer_fired(ticket);
        assert!(dd.is_open());
    }

    #[test]
    fn test_submenu_back_to_toggle_stays_open() {
        let mut dd = wide();
        dd.pointer_enter_item();
        dd.pointer_enter_menu();
        let ticket = scheduled(dd.pointer_leave());

        let effect = dd.pointer_enter_toggle();
        assert_eq!(effect.timer, TimerCommand::Cancel);
        assert!(!effect.changed);
        assert_eq!(dd.close_timer_fired(ticket), DropdownEffect::default());
        assert!(dd.is_open());
        assert!(dd.presentation().item_open);
    }

    #[test]
    fn test_toggle_hover_ignored_when_narrow() {
        let mut dd = DropdownState::new(Breakpoint::Narrow);
        assert_eq!(dd.pointer_enter_toggle(), DropdownEffect::default());
        assert!(dd.presentation().aria_expanded);
    }

    #[test]
    fn test_reschedule_supersedes_older_ticket() {
        let mut dd = wide();
        dd.pointer_enter_item();
        let first = scheduled(dd.pointer_leave());
        dd.pointer_enter_menu();
        let second = scheduled(dd.pointer_leave());
        assert_ne!(first, second);

        dd.close_timer_fired(first);
        assert!(dd.is_open());
        dd.close_timer_fired(second);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_leave_while_closed_schedules_nothing() {
        let mut dd = wide();
        assert_eq!(dd.pointer_leave().timer, TimerCommand::Keep);
    }

    #[test]
    fn test_outside_click_closes_immediately() {
        let mut dd = wide();
        dd.pointer_enter_item();
        let ticket = scheduled(dd.pointer_leave());

        let effect = dd.outside_click();
        assert!(effect.changed);
        assert_eq!(effect.timer, TimerCommand::Cancel);
        assert!(!dd.is_open());
        assert_eq!(dd.close_timer_fired(ticket), DropdownEffect::default());
    }

    #[test]
    fn test_crossing_into_narrow_forces_open() {
        let mut dd = wide();
        dd.pointer_enter_item();
        dd.pointer_leave();

        let effect = dd.sync_viewport(Breakpoint::Narrow);
        assert!(effect.changed);
        assert_eq!(effect.timer, TimerCommand::Cancel);
        assert!(dd.presentation().aria_expanded);
        assert!(dd.presentation().menu_active);
    }

    #[test]
    fn test_crossing_into_wide_starts_closed() {
        let mut dd = DropdownState::new(Breakpoint::Narrow);
        let effect = dd.sync_viewport(Breakpoint::Wide);
        assert!(effect.changed);
        let p = dd.presentation();
        assert!(!p.aria_expanded);
        assert!(!p.menu_active);
        assert!(!p.item_open);
    }

    #[test]
    fn test_resize_within_wide_keeps_hover() {
        let mut dd = wide();
        dd.pointer_enter_item();
        assert_eq!(dd.sync_viewport(Breakpoint::Wide), DropdownEffect::default());
        assert!(dd.is_open());
    }

    #[test]
    fn test_wide_open_and_closed_are_exclusive() {
        let mut dd = wide();
        let steps: [fn(&mut DropdownState) -> DropdownEffect; 4] = [
            DropdownState::pointer_enter_item,
            DropdownState::pointer_leave,
            DropdownState::pointer_enter_menu,
            DropdownState::outside_click,
        ];
        for step in steps.iter().cycle().take(12) {
            step(&mut dd);
            let p = dd.presentation();
            assert_eq!(p.item_open, p.aria_expanded);
            assert!(!p.menu_active);
        }
    }
}
