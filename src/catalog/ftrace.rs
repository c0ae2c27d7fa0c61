//! Ftrace test traces
//!
//! All traces were recorded with trace-cmd on a 5.2 kernel and are stored in
//! the 2.6 file format, one `.dat` file each.

use super::{trace_suite, TraceEntry};

const TRACE_CMD: &str = "trace-cmd (ftrace 2.6)";

trace_suite! {
    /// Bundled test traces for the Ftrace parser
    pub enum FtraceTestTrace in Ftrace => FTRACE_TRACES {
        /// `trace-cmd record -e all ls` on a 4-CPU machine.
        /// 8 MB, 2880 events, ~1 s.
        Test26MultipleCpus =>
            TraceEntry::single("TEST_2_6_MULTIPLE_CPUS", "/2.6/trace_4cpu.dat", 2_880, 1)
                .traced_by(TRACE_CMD),

        /// Exactly one `sys_enter_eventfd2` event, taken while running the
        /// eventfd(2) man page example. 6.4 MB, ~1 s.
        Test26SingleEvent =>
            TraceEntry::single("TEST_2_6_SINGLE_EVENT", "/2.6/trace_single_event.dat", 1, 1)
                .traced_by(TRACE_CMD),

        /// Bad version header produced by a trace-cmd 2.8 bug. Not parsable.
        Test26Invalid =>
            TraceEntry::unparsable("TEST_2_6_INVALID", "/2.6/trace_invalid.dat")
                .traced_by("trace-cmd 2.8"),

        /// Recorded with only `sys_enter_eventfd2` enabled while running `ls`,
        /// which never fires it. Valid header, zero events.
        Test26Empty =>
            TraceEntry::single("TEST_2_6_EMPTY", "/2.6/empty_trace.dat", 0, 0)
                .traced_by(TRACE_CMD),

        /// [`FtraceTestTrace::Test26MultipleCpus`] with the header page section
        /// size inflated past the end of the file.
        Test26BadHeaderPageSectionSize =>
            TraceEntry::single(
                "TEST_2_6_BAD_HEADER_PAGE_SECTION_SIZE",
                "/2.6/trace_injected_header.dat",
                2_880,
                1,
            )
            .traced_by(TRACE_CMD),

        /// [`FtraceTestTrace::Test26MultipleCpus`] with the first CPU section
        /// size inflated past the end of the file.
        Test26BadCpuSectionSize =>
            TraceEntry::single(
                "TEST_2_6_BAD_CPU_SECTION_SIZE",
                "/2.6/trace_injected_cpu.dat",
                2_880,
                1,
            )
            .traced_by(TRACE_CMD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trace_is_a_dat_file() {
        for trace in FtraceTestTrace::ALL {
            assert!(trace.path().starts_with("/2.6/"));
            assert!(trace.path().ends_with(".dat"));
            assert!(!trace.entry().is_collection());
        }
    }

    #[test]
    fn test_invalid_trace_has_no_expectations() {
        assert_eq!(FtraceTestTrace::Test26Invalid.event_count(), None);
        assert_eq!(FtraceTestTrace::Test26Invalid.duration_secs(), None);
    }

    #[test]
    fn test_empty_trace_expects_zero_rather_than_nothing() {
        assert_eq!(FtraceTestTrace::Test26Empty.event_count(), Some(0));
        assert_eq!(FtraceTestTrace::Test26Empty.duration_secs(), Some(0));
    }

    #[test]
    fn test_injected_traces_keep_the_source_expectations() {
        let source = FtraceTestTrace::Test26MultipleCpus;
        for injected in [
            FtraceTestTrace::Test26BadHeaderPageSectionSize,
            FtraceTestTrace::Test26BadCpuSectionSize,
        ] {
            assert_eq!(injected.event_count(), source.event_count());
            assert_eq!(injected.duration_secs(), source.duration_secs());
        }
    }
}
