//! Named special-case templates.
//!
//! Components whose natural example needs structured children (a breadcrumb
//! trail, a paginator, a dialog with trigger and content, ...) get a fixed
//! template instead of the generic `<Name>Example</Name>` instance. Each
//! template also declares the child components it emits so the snippet's
//! import line matches its tags.

use specimen_registry::ComponentKind;

/// A fixed example layout for one canonical component name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    // standalone
    Breadcrumb,
    Pagination,
    Table,
    Menubar,
    Carousel,
    ToggleGroup,
    // compound
    Dialog,
    AlertDialog,
    Sheet,
    Drawer,
    Select,
    DropdownMenu,
    ContextMenu,
    Popover,
    HoverCard,
    Tooltip,
    Tabs,
    Accordion,
    Card,
    Collapsible,
}

/// Canonical name -> template. Adding a special case is one entry here plus
/// its layout in [`Template::render`].
static TEMPLATES: &[(&str, Template)] = &[
    ("Breadcrumb", Template::Breadcrumb),
    ("Pagination", Template::Pagination),
    ("Table", Template::Table),
    ("Menubar", Template::Menubar),
    ("Carousel", Template::Carousel),
    ("ToggleGroup", Template::ToggleGroup),
    ("Dialog", Template::Dialog),
    ("AlertDialog", Template::AlertDialog),
    ("Sheet", Template::Sheet),
    ("Drawer", Template::Drawer),
    ("Select", Template::Select),
    ("DropdownMenu", Template::DropdownMenu),
    ("ContextMenu", Template::ContextMenu),
    ("Popover", Template::Popover),
    ("HoverCard", Template::HoverCard),
    ("Tooltip", Template::Tooltip),
    ("Tabs", Template::Tabs),
    ("Accordion", Template::Accordion),
    ("Card", Template::Card),
    ("Collapsible", Template::Collapsible),
];

impl Template {
    /// Find the template for `name` among templates of `kind`.
    pub fn lookup(name: &str, kind: ComponentKind) -> Option<Self> {
        TEMPLATES
            .iter()
            .find(|(key, template)| *key == name && template.kind() == kind)
            .map(|(_, template)| *template)
    }

    /// All registered templates with their canonical names.
    pub fn all() -> impl Iterator<Item = (&'static str, Template)> {
        TEMPLATES.iter().copied()
    }

    /// Which synthesis branch this template belongs to.
    pub fn kind(self) -> ComponentKind {
        match self {
            Template::Breadcrumb
            | Template::Pagination
            | Template::Table
            | Template::Menubar
            | Template::Carousel
            | Template::ToggleGroup => ComponentKind::Standalone,
            Template::Dialog
            | Template::AlertDialog
            | Template::Sheet
            | Template::Drawer
            | Template::Select
            | Template::DropdownMenu
            | Template::ContextMenu
            | Template::Popover
            | Template::HoverCard
            | Template::Tooltip
            | Template::Tabs
            | Template::Accordion
            | Template::Card
            | Template::Collapsible => ComponentKind::Compound,
        }
    }

    /// Child components emitted by this template, in import order.
    pub fn parts(self) -> &'static [&'static str] {
        match self {
            Template::Breadcrumb => &[
                "BreadcrumbList",
                "BreadcrumbItem",
                "BreadcrumbLink",
                "BreadcrumbSeparator",
                "BreadcrumbPage",
            ],
            Template::Pagination => &[
                "PaginationContent",
                "PaginationItem",
                "PaginationPrevious",
                "PaginationLink",
                "PaginationEllipsis",
                "PaginationNext",
            ],
            Template::Table => &[
                "TableCaption",
                "TableHeader",
                "TableRow",
                "TableHead",
                "TableBody",
                "TableCell",
            ],
            Template::Menubar => &[
                "MenubarMenu",
                "MenubarTrigger",
                "MenubarContent",
                "MenubarItem",
                "MenubarShortcut",
                "MenubarSeparator",
            ],
            Template::Carousel => &[
                "CarouselContent",
                "CarouselItem",
                "CarouselPrevious",
                "CarouselNext",
            ],
            Template::ToggleGroup => &["ToggleGroupItem"],
            Template::Dialog => &[
                "DialogTrigger",
                "DialogContent",
                "DialogHeader",
                "DialogTitle",
                "DialogDescription",
                "DialogFooter",
                "DialogClose",
            ],
            Template::AlertDialog => &[
                "AlertDialogTrigger",
                "AlertDialogContent",
                "AlertDialogHeader",
                "AlertDialogTitle",
                "AlertDialogDescription",
                "AlertDialogFooter",
                "AlertDialogCancel",
                "AlertDialogAction",
            ],
            Template::Sheet => &[
                "SheetTrigger",
                "SheetContent",
                "SheetHeader",
                "SheetTitle",
                "SheetDescription",
            ],
            Template::Drawer => &[
                "DrawerTrigger",
                "DrawerContent",
                "DrawerHeader",
                "DrawerTitle",
                "DrawerDescription",
                "DrawerFooter",
                "DrawerClose",
            ],
            Template::Select => &["SelectTrigger", "SelectValue", "SelectContent", "SelectItem"],
            Template::DropdownMenu => &[
                "DropdownMenuTrigger",
                "DropdownMenuContent",
                "DropdownMenuLabel",
                "DropdownMenuSeparator",
                "DropdownMenuItem",
            ],
            Template::ContextMenu => &[
                "ContextMenuTrigger",
                "ContextMenuContent",
                "ContextMenuItem",
            ],
            Template::Popover => &["PopoverTrigger", "PopoverContent"],
            Template::HoverCard => &["HoverCardTrigger", "HoverCardContent"],
            Template::Tooltip => &["TooltipProvider", "TooltipTrigger", "TooltipContent"],
            Template::Tabs => &["TabsList", "TabsTrigger", "TabsContent"],
            Template::Accordion => &["AccordionItem", "AccordionTrigger", "AccordionContent"],
            Template::Card => &[
                "CardHeader",
                "CardTitle",
                "CardDescription",
                "CardContent",
                "CardFooter",
            ],
            Template::Collapsible => &["CollapsibleTrigger", "CollapsibleContent"],
        }
    }

    /// Render the template's tag tree. `display` is the PascalCase name of
    /// the requested component, used in visible text.
    pub fn render(self, display: &str) -> String {
        match self {
            Template::Breadcrumb => r#"<Breadcrumb>
  <BreadcrumbList>
    <BreadcrumbItem>
      <BreadcrumbLink href="/">Home</BreadcrumbLink>
    </BreadcrumbItem>
    <BreadcrumbSeparator />
    <BreadcrumbItem>
      <BreadcrumbLink href="/components">Components</BreadcrumbLink>
    </BreadcrumbItem>
    <BreadcrumbSeparator />
    <BreadcrumbItem>
      <BreadcrumbPage>Breadcrumb</BreadcrumbPage>
    </BreadcrumbItem>
  </BreadcrumbList>
</Breadcrumb>"#
                .to_string(),
            Template::Pagination => r##"<Pagination>
  <PaginationContent>
    <PaginationItem>
      <PaginationPrevious href="#" />
    </PaginationItem>
    <PaginationItem>
      <PaginationLink href="#">1</PaginationLink>
    </PaginationItem>
    <PaginationItem>
      <PaginationLink href="#" isActive>
        2
      </PaginationLink>
    </PaginationItem>
    <PaginationItem>
      <PaginationLink href="#">3</PaginationLink>
    </PaginationItem>
    <PaginationItem>
      <PaginationEllipsis />
    </PaginationItem>
    <PaginationItem>
      <PaginationNext href="#" />
    </PaginationItem>
  </PaginationContent>
</Pagination>"##
                .to_string(),
            Template::Table => r#"<Table>
  <TableCaption>A list of recent invoices.</TableCaption>
  <TableHeader>
    <TableRow>
      <TableHead>Invoice</TableHead>
      <TableHead>Status</TableHead>
      <TableHead className="text-right">Amount</TableHead>
    </TableRow>
  </TableHeader>
  <TableBody>
    <TableRow>
      <TableCell>INV001</TableCell>
      <TableCell>Paid</TableCell>
      <TableCell className="text-right">$250.00</TableCell>
    </TableRow>
    <TableRow>
      <TableCell>INV002</TableCell>
      <TableCell>Pending</TableCell>
      <TableCell className="text-right">$150.00</TableCell>
    </TableRow>
  </TableBody>
</Table>"#
                .to_string(),
            Template::Menubar => r#"<Menubar>
  <MenubarMenu>
    <MenubarTrigger>File</MenubarTrigger>
    <MenubarContent>
      <MenubarItem>
        New Tab <MenubarShortcut>⌘T</MenubarShortcut>
      </MenubarItem>
      <MenubarItem>New Window</MenubarItem>
      <MenubarSeparator />
      <MenubarItem>Print</MenubarItem>
    </MenubarContent>
  </MenubarMenu>
  <MenubarMenu>
    <MenubarTrigger>Edit</MenubarTrigger>
    <MenubarContent>
      <MenubarItem>Undo</MenubarItem>
      <MenubarItem>Redo</MenubarItem>
    </MenubarContent>
  </MenubarMenu>
</Menubar>"#
                .to_string(),
            Template::Carousel => r#"<Carousel className="w-full max-w-xs">
  <CarouselContent>
    <CarouselItem>Slide 1</CarouselItem>
    <CarouselItem>Slide 2</CarouselItem>
    <CarouselItem>Slide 3</CarouselItem>
  </CarouselContent>
  <CarouselPrevious />
  <CarouselNext />
</Carousel>"#
                .to_string(),
            Template::ToggleGroup => r#"<ToggleGroup type="single" defaultValue="left">
  <ToggleGroupItem value="left">Left</ToggleGroupItem>
  <ToggleGroupItem value="center">Center</ToggleGroupItem>
  <ToggleGroupItem value="right">Right</ToggleGroupItem>
</ToggleGroup>"#
                .to_string(),
            Template::Dialog => format!(
                r#"<Dialog>
  <DialogTrigger>Open {display}</DialogTrigger>
  <DialogContent>
    <DialogHeader>
      <DialogTitle>{display}</DialogTitle>
      <DialogDescription>Make changes here. Click save when you're done.</DialogDescription>
    </DialogHeader>
    <DialogFooter>
      <DialogClose>Close</DialogClose>
    </DialogFooter>
  </DialogContent>
</Dialog>"#
            ),
            Template::AlertDialog => format!(
                r#"<AlertDialog>
  <AlertDialogTrigger>Open {display}</AlertDialogTrigger>
  <AlertDialogContent>
    <AlertDialogHeader>
      <AlertDialogTitle>Are you absolutely sure?</AlertDialogTitle>
      <AlertDialogDescription>This action cannot be undone.</AlertDialogDescription>
    </AlertDialogHeader>
    <AlertDialogFooter>
      <AlertDialogCancel>Cancel</AlertDialogCancel>
      <AlertDialogAction>Continue</AlertDialogAction>
    </AlertDialogFooter>
  </AlertDialogContent>
</AlertDialog>"#
            ),
            Template::Sheet => format!(
                r#"<Sheet>
  <SheetTrigger>Open {display}</SheetTrigger>
  <SheetContent>
    <SheetHeader>
      <SheetTitle>{display}</SheetTitle>
      <SheetDescription>Side panel content goes here.</SheetDescription>
    </SheetHeader>
  </SheetContent>
</Sheet>"#
            ),
            Template::Drawer => format!(
                r#"<Drawer>
  <DrawerTrigger>Open {display}</DrawerTrigger>
  <DrawerContent>
    <DrawerHeader>
      <DrawerTitle>{display}</DrawerTitle>
      <DrawerDescription>Swipe down to dismiss.</DrawerDescription>
    </DrawerHeader>
    <DrawerFooter>
      <DrawerClose>Close</DrawerClose>
    </DrawerFooter>
  </DrawerContent>
</Drawer>"#
            ),
            Template::Select => r#"<Select>
  <SelectTrigger className="w-[180px]">
    <SelectValue placeholder="Select a fruit" />
  </SelectTrigger>
  <SelectContent>
    <SelectItem value="apple">Apple</SelectItem>
    <SelectItem value="banana">Banana</SelectItem>
    <SelectItem value="cherry">Cherry</SelectItem>
  </SelectContent>
</Select>"#
                .to_string(),
            Template::DropdownMenu => r#"<DropdownMenu>
  <DropdownMenuTrigger>Open menu</DropdownMenuTrigger>
  <DropdownMenuContent>
    <DropdownMenuLabel>My Account</DropdownMenuLabel>
    <DropdownMenuSeparator />
    <DropdownMenuItem>Profile</DropdownMenuItem>
    <DropdownMenuItem>Settings</DropdownMenuItem>
    <DropdownMenuItem>Log out</DropdownMenuItem>
  </DropdownMenuContent>
</DropdownMenu>"#
                .to_string(),
            Template::ContextMenu => r#"<ContextMenu>
  <ContextMenuTrigger className="flex h-32 w-64 items-center justify-center rounded-md border border-dashed">
    Right click here
  </ContextMenuTrigger>
  <ContextMenuContent>
    <ContextMenuItem>Back</ContextMenuItem>
    <ContextMenuItem>Forward</ContextMenuItem>
    <ContextMenuItem>Reload</ContextMenuItem>
  </ContextMenuContent>
</ContextMenu>"#
                .to_string(),
            Template::Popover => format!(
                r#"<Popover>
  <PopoverTrigger>Open {display}</PopoverTrigger>
  <PopoverContent>Place content for the popover here.</PopoverContent>
</Popover>"#
            ),
            Template::HoverCard => r#"<HoverCard>
  <HoverCardTrigger>Hover me</HoverCardTrigger>
  <HoverCardContent>Extra details appear on hover.</HoverCardContent>
</HoverCard>"#
                .to_string(),
            Template::Tooltip => r#"<TooltipProvider>
  <Tooltip>
    <TooltipTrigger>Hover</TooltipTrigger>
    <TooltipContent>Add to library</TooltipContent>
  </Tooltip>
</TooltipProvider>"#
                .to_string(),
            Template::Tabs => r#"<Tabs defaultValue="account" className="w-[400px]">
  <TabsList>
    <TabsTrigger value="account">Account</TabsTrigger>
    <TabsTrigger value="password">Password</TabsTrigger>
  </TabsList>
  <TabsContent value="account">Make changes to your account here.</TabsContent>
  <TabsContent value="password">Change your password here.</TabsContent>
</Tabs>"#
                .to_string(),
            Template::Accordion => r#"<Accordion type="single" collapsible className="w-full">
  <AccordionItem value="item-1">
    <AccordionTrigger>Is it accessible?</AccordionTrigger>
    <AccordionContent>Yes. It adheres to the WAI-ARIA design pattern.</AccordionContent>
  </AccordionItem>
  <AccordionItem value="item-2">
    <AccordionTrigger>Is it styled?</AccordionTrigger>
    <AccordionContent>Yes. It comes with default styles.</AccordionContent>
  </AccordionItem>
</Accordion>"#
                .to_string(),
            Template::Card => format!(
                r#"<Card className="w-[350px]">
  <CardHeader>
    <CardTitle>{display}</CardTitle>
    <CardDescription>Card description</CardDescription>
  </CardHeader>
  <CardContent>Card content</CardContent>
  <CardFooter>Card footer</CardFooter>
</Card>"#
            ),
            Template::Collapsible => r#"<Collapsible>
  <CollapsibleTrigger>Toggle</CollapsibleTrigger>
  <CollapsibleContent>Hidden content revealed on toggle.</CollapsibleContent>
</Collapsible>"#
                .to_string(),
        }
    }
}
