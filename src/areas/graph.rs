use crate::areas::interpreter::Interpreter;
use crate::artifacts::render::Renderer;
use crate::artifacts::render::options::GraphOptions;
use crate::artifacts::script::Script;
use crate::artifacts::script::diagnostic::Diagnostic;
use derive_new::new;

/// Outcome of one render pass: the problems found in the script and where the
/// commit counter ended up. The rendered graph itself is a side effect on the
/// renderer.
#[derive(Debug, Clone, new)]
pub struct RenderReport {
    diagnostics: Vec<Diagnostic>,
    commit_number: i64,
}

impl RenderReport {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Final value of the commit counter after the whole script ran.
    pub fn commit_number(&self) -> i64 {
        self.commit_number
    }
}

/// Entry point: a display configuration plus the ability to replay scripts
/// against any renderer.
#[derive(Debug, Clone, Default, new)]
pub struct GitGraph {
    options: GraphOptions,
}

impl GitGraph {
    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Parses `script_text` and replays it against `renderer`.
    ///
    /// Malformed script lines are reported, never fatal. The renderer is
    /// configured once, before the first mutation, even for empty scripts.
    pub fn render<R: Renderer>(
        &self,
        script_text: &str,
        renderer: &mut R,
    ) -> anyhow::Result<RenderReport> {
        let script = Script::parse(script_text);
        renderer.configure(&self.options)?;

        Interpreter::new(&self.options, renderer).execute(&script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::branch::branch_name::BranchName;
    use crate::artifacts::render::trace::{GraphEvent, TraceRenderer};
    use crate::artifacts::render::{BranchHandle, CommitSpec};
    use crate::artifacts::script::diagnostic::DiagnosticKind;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn render(script: &str) -> (TraceRenderer, RenderReport) {
        render_with(GraphOptions::default(), script)
    }

    fn render_with(options: GraphOptions, script: &str) -> (TraceRenderer, RenderReport) {
        let mut renderer = TraceRenderer::default();
        let report = GitGraph::new(options)
            .render(script, &mut renderer)
            .unwrap();
        (renderer, report)
    }

    #[rstest]
    #[case::empty("")]
    #[case::comments_only("# one\n# two")]
    #[case::blank_and_comments("\n\n  # note\n   \n")]
    fn scripts_without_commands_touch_nothing(#[case] script: &str) {
        let (renderer, report) = render(script);

        assert_eq!(renderer.events(), &[]);
        assert!(!report.has_diagnostics());
        assert_eq!(report.commit_number(), 0);
    }

    #[test]
    fn rechecking_out_a_branch_reuses_its_handle() {
        let (renderer, _) = render("checkout main\ncheckout main");

        let created: Vec<_> = renderer
            .events()
            .iter()
            .filter(|e| matches!(e, GraphEvent::BranchCreated { .. }))
            .collect();
        assert_eq!(created.len(), 1);
    }

    #[test]
    fn multi_name_checkout_forks_all_names_off_the_current_branch() {
        let (renderer, _) = render("checkout main\ncheckout feature-b feature-c\ncommit tip");

        let main = BranchHandle::new(0);
        assert_eq!(
            renderer.events(),
            &[
                GraphEvent::BranchCreated {
                    handle: main,
                    name: BranchName::from("main"),
                    from: None,
                },
                GraphEvent::BranchCreated {
                    handle: BranchHandle::new(1),
                    name: BranchName::from("feature-b"),
                    from: Some(main),
                },
                GraphEvent::BranchCreated {
                    handle: BranchHandle::new(2),
                    name: BranchName::from("feature-c"),
                    from: Some(main),
                },
                // the commit lands on the last checked-out name
                GraphEvent::Committed {
                    branch: BranchHandle::new(2),
                    spec: CommitSpec::new("tip".to_string(), None),
                },
            ]
        );
    }

    #[test]
    fn commit_without_label_when_numbering_is_off() {
        let (renderer, report) = render("checkout main\ncommit hello world");

        assert_eq!(
            renderer.events()[1],
            GraphEvent::Committed {
                branch: BranchHandle::new(0),
                spec: CommitSpec::new("hello world".to_string(), None),
            }
        );
        assert_eq!(report.commit_number(), 1);
    }

    #[test]
    fn commit_before_any_checkout_still_advances_the_counter() {
        let (renderer, report) = render("commit orphan\ncommit another");

        assert_eq!(renderer.events(), &[]);
        assert_eq!(report.commit_number(), 2);
    }

    #[test]
    fn set_commit_num_drives_the_next_label() {
        let options = GraphOptions {
            show_commit_number: true,
            ..GraphOptions::default()
        };
        let (renderer, report) = render_with(options, "checkout main\nset_commit_num 5\ncommit x");

        assert_eq!(
            renderer.events()[1],
            GraphEvent::Committed {
                branch: BranchHandle::new(0),
                spec: CommitSpec::new("x".to_string(), Some("C5".to_string())),
            }
        );
        assert_eq!(report.commit_number(), 6);
    }

    #[test]
    fn commit_number_base_offsets_the_first_label() {
        let options = GraphOptions {
            show_commit_number: true,
            commit_number_base: 10,
            ..GraphOptions::default()
        };
        let (renderer, _) = render_with(options, "checkout main\ncommit first");

        assert_eq!(
            renderer.events()[1],
            GraphEvent::Committed {
                branch: BranchHandle::new(0),
                spec: CommitSpec::new("first".to_string(), Some("C10".to_string())),
            }
        );
    }

    #[rstest]
    #[case::unknown_source("checkout main\nmerge ghost")]
    #[case::no_source("checkout main\nmerge")]
    #[case::no_current_branch("merge main")]
    fn unresolvable_merges_are_no_ops(#[case] script: &str) {
        let (renderer, report) = render(script);

        assert!(
            !renderer
                .events()
                .iter()
                .any(|e| matches!(e, GraphEvent::Merged { .. }))
        );
        assert!(!report.has_diagnostics());
    }

    #[test]
    fn merge_targets_the_current_branch() {
        let (renderer, _) =
            render("checkout main\ncommit base\ncheckout feature\ncommit work\ncheckout main\nmerge feature");

        assert_eq!(
            renderer.events().last(),
            Some(&GraphEvent::Merged {
                target: BranchHandle::new(0),
                source: BranchHandle::new(1),
            })
        );
    }

    #[test]
    fn unknown_commands_warn_without_changing_state() {
        let (renderer, report) = render("checkout main\nfoo bar\ncommit after");

        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(report.diagnostics()[0].kind(), DiagnosticKind::UnknownCommand);
        assert_eq!(report.diagnostics()[0].line(), 2);
        // the commit still lands on main and still gets counter value 0
        assert_eq!(
            renderer.events()[1],
            GraphEvent::Committed {
                branch: BranchHandle::new(0),
                spec: CommitSpec::new("after".to_string(), None),
            }
        );
        assert_eq!(report.commit_number(), 1);
    }

    #[test]
    fn malformed_set_commit_num_leaves_the_counter_alone() {
        let options = GraphOptions {
            show_commit_number: true,
            ..GraphOptions::default()
        };
        let (renderer, report) =
            render_with(options, "checkout main\ncommit a\nset_commit_num nan\ncommit b");

        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(report.diagnostics()[0].kind(), DiagnosticKind::ParseError);
        assert_eq!(
            renderer.events()[2],
            GraphEvent::Committed {
                branch: BranchHandle::new(0),
                spec: CommitSpec::new("b".to_string(), Some("C1".to_string())),
            }
        );
        assert_eq!(report.commit_number(), 2);
    }

    #[test]
    fn the_renderer_receives_the_options_it_was_configured_with() {
        let options = GraphOptions {
            show_commit_number: true,
            max_height: Some(480),
            ..GraphOptions::default()
        };
        let (renderer, _) = render_with(options, "");

        let seen = renderer.options().unwrap();
        assert!(seen.show_commit_number);
        assert_eq!(seen.max_height, Some(480));
    }

    #[test]
    fn two_renders_share_no_state() {
        let graph = GitGraph::new(GraphOptions::default());

        let mut first = TraceRenderer::default();
        let report = graph.render("checkout main\ncommit a", &mut first).unwrap();
        assert_eq!(report.commit_number(), 1);

        let mut second = TraceRenderer::default();
        let report = graph.render("commit b", &mut second).unwrap();
        // fresh counter, and no branch named main anywhere
        assert_eq!(report.commit_number(), 1);
        assert_eq!(second.events(), &[]);
    }

    proptest! {
        #[test]
        fn comment_and_blank_scripts_never_reach_the_renderer(
            lines in prop::collection::vec(
                prop_oneof![
                    prop::string::string_regex("[ \t]{0,6}").unwrap(),
                    prop::string::string_regex("#[ -~]{0,30}").unwrap(),
                ],
                0..30,
            )
        ) {
            let (renderer, report) = render(&lines.join("\n"));
            prop_assert!(renderer.events().is_empty());
            prop_assert!(!report.has_diagnostics());
        }

        #[test]
        fn the_counter_always_ends_at_base_plus_commit_count(
            base in -1000i64..1000,
            commits in 0usize..50,
        ) {
            let script = vec!["commit x"; commits].join("\n");
            let options = GraphOptions { commit_number_base: base, ..GraphOptions::default() };
            let (_, report) = render_with(options, &script);
            prop_assert_eq!(report.commit_number(), base + commits as i64);
        }
    }
}
