#[cfg(test)]
mod tests {
    use crate::menu_height::calculate_list_height;
    use crate::option::SelectOption;
    use crate::row_height::RowHeight;
    use std::cell::Cell;
    use std::rc::Rc;

    fn abc() -> Vec<SelectOption> {
        vec![
            SelectOption::new("A"),
            SelectOption::new("B").disabled(true),
            SelectOption::new("C"),
        ]
    }

    #[test]
    fn sums_fixed_heights_below_cap() {
        assert_eq!(calculate_list_height(&abc(), &RowHeight::Fixed(35), 200), 105);
    }

    #[test]
    fn caps_fixed_heights() {
        assert_eq!(calculate_list_height(&abc(), &RowHeight::Fixed(35), 50), 50);
    }

    #[test]
    fn constant_height_matches_min_formula() {
        for len in 0..12usize {
            let options: Vec<_> = (0..len).map(|i| SelectOption::new(i.to_string())).collect();
            for h in [1u16, 2, 3, 7] {
                for max in [0u16, 1, 5, 10, 40] {
                    let expected = (len as u32 * u32::from(h)).min(u32::from(max)) as u16;
                    assert_eq!(
                        calculate_list_height(&options, &RowHeight::Fixed(h), max),
                        expected
                    );
                }
            }
        }
    }

    #[test]
    fn empty_list_has_zero_height() {
        assert_eq!(calculate_list_height(&[], &RowHeight::Fixed(3), 10), 0);
    }

    #[test]
    fn total_equal_to_cap_is_not_capped_early() {
        let options = vec![SelectOption::new("A"), SelectOption::new("B")];
        assert_eq!(calculate_list_height(&options, &RowHeight::Fixed(5), 10), 10);
    }

    #[test]
    fn dynamic_heights_short_circuit() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let policy = RowHeight::dynamic(move |option| {
            counter.set(counter.get() + 1);
            option.label("label").len() as u16
        });
        let options: Vec<_> = ["aaa", "bbbb", "cc", "dddddd", "e"]
            .into_iter()
            .map(SelectOption::new)
            .collect();
        // 3 + 4 = 7，再加 2 = 9 > 8 时停止
        assert_eq!(calculate_list_height(&options, &policy, 8), 8);
        assert_eq!(calls.get(), 3);

        calls.set(0);
        assert_eq!(calculate_list_height(&options, &policy, 100), 16);
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn field_policy_reads_numeric_attribute() {
        let policy = RowHeight::from_field("height", 1);
        let options = vec![
            SelectOption::new("A").with_attr("height", "3"),
            SelectOption::new("B").with_attr("height", "oops"),
            SelectOption::new("C"),
        ];
        assert_eq!(calculate_list_height(&options, &policy, 20), 5);
    }

    #[test]
    fn huge_heights_saturate() {
        let options = vec![SelectOption::new("A"); 4];
        assert_eq!(
            calculate_list_height(&options, &RowHeight::Fixed(u16::MAX), u16::MAX),
            u16::MAX
        );
    }
}
