use x11rb::atom_manager;

atom_manager! {
    /// The EWMH atoms used to read the client list and move windows.
    pub AtomCollection:

    /// A handle to a response from the X11 server.
    AtomCollectionCookie {
        NetClientList: b"_NET_CLIENT_LIST" as &[u8],
        NetWMPid: b"_NET_WM_PID",
        NetWMName: b"_NET_WM_NAME",
        NetMoveResizeWindow: b"_NET_MOVERESIZE_WINDOW",
        NetDesktopViewport: b"_NET_DESKTOP_VIEWPORT",
    }
}
