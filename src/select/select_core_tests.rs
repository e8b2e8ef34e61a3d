#[cfg(test)]
mod tests {
    use crate::option::SelectOption;
    use crate::select::select_core::SelectCore;
    use crate::select::{MenuAction, SelectProps};
    use crate::test_support::{abc_options, key, options};
    use crossterm::event::{Event, KeyCode};

    fn press(core: &mut SelectCore, code: KeyCode, visible: &[SelectOption]) -> bool {
        match key(code) {
            Event::Key(k) => core.handle_key(k, visible),
            _ => unreachable!(),
        }
    }

    fn core(options: Vec<SelectOption>) -> SelectCore {
        SelectCore::new(SelectProps::default().with_options(options))
    }

    #[test]
    fn down_opens_then_moves_focus_skipping_disabled() {
        let opts = abc_options();
        let mut core = core(opts.clone());
        assert!(press(&mut core, KeyCode::Down, &opts));
        assert!(core.is_open());
        assert_eq!(core.focused(), Some(&opts[0]));
        press(&mut core, KeyCode::Down, &opts);
        assert_eq!(core.focused(), Some(&opts[2]));
        press(&mut core, KeyCode::Down, &opts);
        assert_eq!(core.focused(), Some(&opts[0]));
        press(&mut core, KeyCode::Up, &opts);
        assert_eq!(core.focused(), Some(&opts[2]));
    }

    #[test]
    fn page_keys_clamp() {
        let opts = options(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut core = core(opts.clone());
        press(&mut core, KeyCode::Down, &opts);
        press(&mut core, KeyCode::PageDown, &opts);
        assert_eq!(core.focused(), Some(&opts[5]));
        press(&mut core, KeyCode::PageDown, &opts);
        assert_eq!(core.focused(), Some(&opts[6]));
        press(&mut core, KeyCode::PageUp, &opts);
        assert_eq!(core.focused(), Some(&opts[1]));
        press(&mut core, KeyCode::Home, &opts);
        assert_eq!(core.focused(), Some(&opts[0]));
        press(&mut core, KeyCode::End, &opts);
        assert_eq!(core.focused(), Some(&opts[6]));
    }

    #[test]
    fn enter_selects_and_closes_in_single_mode() {
        let opts = abc_options();
        let mut core = core(opts.clone());
        press(&mut core, KeyCode::Enter, &opts);
        assert!(core.is_open());
        press(&mut core, KeyCode::Down, &opts);
        press(&mut core, KeyCode::Enter, &opts);
        assert_eq!(core.value(), &[opts[2].clone()]);
        assert!(!core.is_open());
    }

    #[test]
    fn reopening_focuses_current_value() {
        let opts = abc_options();
        let mut core = core(opts.clone());
        core.select_option(opts[2].clone());
        core.open_menu(&opts);
        assert_eq!(core.focused(), Some(&opts[2]));
    }

    #[test]
    fn multi_mode_toggles_and_hides_selected() {
        let opts = options(&["a", "b", "c"]);
        let mut core = SelectCore::new(
            SelectProps::default()
                .with_options(opts.clone())
                .multi(true),
        );
        core.open_menu(&opts);
        core.select_option(opts[1].clone());
        assert!(core.is_open());
        assert_eq!(core.filter_options(&opts), vec![opts[0].clone(), opts[2].clone()]);
        core.select_option(opts[0].clone());
        core.select_option(opts[1].clone());
        assert_eq!(core.value(), &[opts[0].clone()]);
    }

    #[test]
    fn typing_filters_case_insensitively() {
        let opts = options(&["Apple", "banana", "Cherry", "pineapple"]);
        let mut core = core(opts.clone());
        for c in "APP".chars() {
            press(&mut core, KeyCode::Char(c), &opts);
        }
        assert!(core.is_open());
        assert_eq!(core.input(), "APP");
        assert_eq!(core.filter_options(&opts), vec![opts[0].clone(), opts[3].clone()]);
        press(&mut core, KeyCode::Backspace, &opts);
        assert_eq!(core.input(), "AP");
    }

    #[test]
    fn filter_matches_value_attribute() {
        let opts = vec![SelectOption::new("北京").with_value("beijing")];
        let mut core = core(opts.clone());
        press(&mut core, KeyCode::Char('b'), &opts);
        assert_eq!(core.filter_options(&opts).len(), 1);
    }

    #[test]
    fn escape_closes_then_clears_value() {
        let opts = abc_options();
        let mut core = core(opts.clone());
        core.select_option(opts[0].clone());
        press(&mut core, KeyCode::Char('x'), &opts);
        assert!(press(&mut core, KeyCode::Esc, &opts));
        assert!(!core.is_open());
        assert_eq!(core.input(), "");
        assert_eq!(core.value().len(), 1);
        assert!(press(&mut core, KeyCode::Esc, &opts));
        assert!(core.value().is_empty());
        assert!(!press(&mut core, KeyCode::Esc, &opts));
    }

    #[test]
    fn backspace_removes_last_value_when_input_empty() {
        let opts = options(&["a", "b"]);
        let mut core = SelectCore::new(SelectProps::default().multi(true));
        core.select_option(opts[0].clone());
        core.select_option(opts[1].clone());
        press(&mut core, KeyCode::Backspace, &opts);
        assert_eq!(core.value(), &[opts[0].clone()]);
    }

    #[test]
    fn disabled_control_ignores_keys() {
        let opts = abc_options();
        let mut props = SelectProps::default().with_options(opts.clone());
        props.disabled = true;
        let mut core = SelectCore::new(props);
        assert!(!press(&mut core, KeyCode::Down, &opts));
        assert!(!core.is_open());
    }

    #[test]
    fn disabled_options_cannot_be_selected() {
        let opts = abc_options();
        let mut core = core(opts.clone());
        core.select_option(opts[1].clone());
        assert!(core.value().is_empty());
    }

    #[test]
    fn single_mode_keeps_only_first_initial_value() {
        let opts = options(&["a", "b"]);
        let mut props = SelectProps::default();
        props.value = opts.clone();
        assert_eq!(SelectCore::new(props).value(), &[opts[0].clone()]);
    }

    #[test]
    fn menu_actions_apply_in_order() {
        let opts = options(&["a", "b"]);
        let mut core = core(opts.clone());
        core.open_menu(&opts);
        core.pending_for_test()
            .borrow_mut()
            .extend([MenuAction::Focus(opts[1].clone()), MenuAction::Select(opts[1].clone())]);
        core.apply_actions();
        assert_eq!(core.value(), &[opts[1].clone()]);
        assert_eq!(core.focused(), Some(&opts[1]));
    }
}
