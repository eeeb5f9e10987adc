pub(crate) mod toaster;
